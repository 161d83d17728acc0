use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RuleType, Severity};

/// A stored regex style rule for one language.
///
/// `pattern` is compiled case-insensitively at application time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Rule {
    pub id: i64,
    pub language: String,
    pub pattern: String,
    pub replacement: String,
    #[schemars(with = "String")]
    pub rule_type: RuleType,
    pub severity: Severity,
    pub description: Option<String>,
    pub source_file: Option<String>,
    pub created_at: DateTime<Utc>,
}
