//! Response types returned by the checking engine and the `lex` binary.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Issue;

/// Row counts and provenance summary of a term database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoreStatistics {
    pub total_terms: u64,
    pub total_rules: u64,
    /// Term counts keyed by `source_lang`.
    pub terms_by_language: BTreeMap<String, u64>,
    /// Rule counts keyed by `language`.
    pub rules_by_language: BTreeMap<String, u64>,
    /// Distinct `source_file` values recorded on terms, sorted.
    pub source_files: Vec<String>,
    pub database_path: String,
}

/// Result of one `check` call, with the metadata a transport layer reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckReport {
    pub text: String,
    pub language: String,
    pub issues: Vec<Issue>,
    /// Whether an external analyzer answered within its timeout for this check.
    pub analysis_used: bool,
    /// Name of the external analyzer, when one is configured.
    pub analyzer: Option<String>,
}
