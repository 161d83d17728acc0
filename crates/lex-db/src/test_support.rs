//! Shared test utilities for lex-db unit tests.

use lex_core::enums::TermType;

use crate::IN_MEMORY;
use crate::inputs::NewTerm;
use crate::store::LexStore;

/// Create an in-memory store with the default rules seeded.
pub async fn test_store() -> LexStore {
    LexStore::new_local(IN_MEMORY).await.unwrap()
}

/// Insert an en→jp term of the given type and return its id.
pub async fn add_en_term(store: &LexStore, source: &str, target: &str, term_type: TermType) -> i64 {
    store
        .add_term(&NewTerm::new("en", "jp", source, target).term_type(term_type))
        .await
        .unwrap()
        .id
}
