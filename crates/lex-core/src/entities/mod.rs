//! Entity structs for Lexicon.
//!
//! `Term` and `Rule` map to the `terms` and `rules` tables. `Issue` is
//! transient: produced fresh on every check and never persisted.

mod issue;
mod rule;
mod term;

pub use issue::{Issue, IssueKey, KIND_PLACEHOLDER_ISSUE, KIND_TERMINOLOGY_MATCH};
pub use rule::Rule;
pub use term::Term;
