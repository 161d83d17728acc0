use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TermType;

/// A stored source-language to target-language term pair.
///
/// `id` is the storage row id. Several terms may share a `source_term`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Term {
    pub id: i64,
    pub source_lang: String,
    pub target_lang: String,
    pub source_term: String,
    pub target_term: String,
    pub term_type: TermType,
    pub domain: Option<String>,
    pub definition: Option<String>,
    pub usage_note: Option<String>,
    /// Exchange file the term was imported from, if any.
    pub source_file: Option<String>,
    pub created_at: DateTime<Utc>,
}
