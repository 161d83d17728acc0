//! Term types, rule types, severities, and issue sources for Lexicon.
//!
//! Closed enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage. `RuleType` is open-ended: names outside
//! the known set round-trip through `RuleType::Custom`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TermType
// ---------------------------------------------------------------------------

/// Usage status of a stored term pair.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TermType {
    #[default]
    Preferred,
    Admitted,
    Deprecated,
}

impl TermType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::Admitted => "admitted",
            Self::Deprecated => "deprecated",
        }
    }

    /// Read a stored `term_type` value leniently.
    ///
    /// Imported stores may carry exchange-format status names such as
    /// `preferredTerm-admn-sts`; anything that is neither preferred nor
    /// deprecated/superseded counts as admitted.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        let value = value.trim().to_ascii_lowercase();
        if value.starts_with("preferred") {
            Self::Preferred
        } else if value.starts_with("deprecated") || value.starts_with("superseded") {
            Self::Deprecated
        } else {
            Self::Admitted
        }
    }

    /// Candidate ordering rank used when scanning terms: preferred first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Preferred => 0,
            Self::Admitted => 1,
            Self::Deprecated => 2,
        }
    }

    /// Severity of a suggestion produced from a term of this type.
    #[must_use]
    pub const fn suggestion_severity(self) -> Severity {
        match self {
            Self::Preferred => Severity::Info,
            Self::Admitted | Self::Deprecated => Severity::Warning,
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RuleType
// ---------------------------------------------------------------------------

/// Category of a style rule. Doubles as the `kind` of issues the rule emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    #[default]
    PreferredSynonym,
    ForbiddenTerm,
    Consistency,
    Clarity,
    /// Any operator-defined category not in the known set.
    Custom(String),
}

impl RuleType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PreferredSynonym => "preferred_synonym",
            Self::ForbiddenTerm => "forbidden_term",
            Self::Consistency => "consistency",
            Self::Clarity => "clarity",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for RuleType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "preferred_synonym" => Self::PreferredSynonym,
            "forbidden_term" => Self::ForbiddenTerm,
            "consistency" => Self::Consistency,
            "clarity" => Self::Clarity,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for RuleType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RuleType> for String {
    fn from(value: RuleType) -> Self {
        match value {
            RuleType::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How strongly an issue should be surfaced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Read a stored `severity` value leniently.
    ///
    /// Rows written outside `add_rule` may carry names such as `high` or
    /// `Warning`; anything that is not error or info counts as a warning.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            _ => Self::Warning,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueSource
// ---------------------------------------------------------------------------

/// Which part of the engine produced an issue.
///
/// Also fixes the merge order used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueSource {
    Database,
    Rules,
    Validation,
    External,
}

impl IssueSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Rules => "rules",
            Self::Validation => "validation",
            Self::External => "external",
        }
    }

    /// Whether offsets from this source come from a direct scan of the text.
    #[must_use]
    pub const fn is_scanned(self) -> bool {
        !matches!(self, Self::External)
    }
}

impl fmt::Display for IssueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
