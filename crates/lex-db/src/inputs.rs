//! Insert payloads for the term and rule stores.
//!
//! Required fields go through `new`; optional metadata is chained on.
//!
//! ```
//! use lex_core::enums::TermType;
//! use lex_db::inputs::NewTerm;
//!
//! let term = NewTerm::new("en", "jp", "Settings", "設定")
//!     .term_type(TermType::Preferred)
//!     .domain("navigation");
//! assert!(term.validate().is_ok());
//! ```

use lex_core::enums::{RuleType, Severity, TermType};

use crate::error::DatabaseError;

/// A term pair to insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTerm {
    pub source_lang: String,
    pub target_lang: String,
    pub source_term: String,
    pub target_term: String,
    pub term_type: TermType,
    pub domain: Option<String>,
    pub definition: Option<String>,
    pub usage_note: Option<String>,
    pub source_file: Option<String>,
}

impl NewTerm {
    #[must_use]
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        source_term: impl Into<String>,
        target_term: impl Into<String>,
    ) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            source_term: source_term.into(),
            target_term: target_term.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn term_type(mut self, term_type: TermType) -> Self {
        self.term_type = term_type;
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    #[must_use]
    pub fn usage_note(mut self, usage_note: impl Into<String>) -> Self {
        self.usage_note = Some(usage_note.into());
        self
    }

    #[must_use]
    pub fn source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }

    /// Check the non-empty invariants on languages and terms.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidRecord` naming the first empty field.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        require("source_lang", &self.source_lang)?;
        require("target_lang", &self.target_lang)?;
        require("source_term", &self.source_term)?;
        require("target_term", &self.target_term)
    }
}

/// A style rule to insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRule {
    pub language: String,
    pub pattern: String,
    pub replacement: String,
    pub rule_type: RuleType,
    pub severity: Severity,
    pub description: Option<String>,
    pub source_file: Option<String>,
}

impl NewRule {
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rule_type(mut self, rule_type: impl Into<RuleType>) -> Self {
        self.rule_type = rule_type.into();
        self
    }

    #[must_use]
    pub const fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }

    /// Check that language, pattern, replacement, and type are present.
    ///
    /// The pattern is not compiled here: a rule whose pattern does not compile
    /// is stored and then skipped each time rules are applied.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidRecord` naming the first empty field.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        require("language", &self.language)?;
        require("pattern", &self.pattern)?;
        require("replacement", &self.replacement)?;
        require("rule_type", self.rule_type.as_str())
    }
}

fn require(field: &str, value: &str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        return Err(DatabaseError::InvalidRecord(format!("{field} must not be empty")));
    }
    Ok(())
}
