//! Placeholder validation.
//!
//! Flags format placeholders with nothing between their delimiters, plus the
//! bare `{}`, `%s`, and `%d` forms. A name made of whitespace is still a name. Each family is an
//! independent pass, so `${}` is reported by both the brace and shell passes.

use std::sync::LazyLock;

use regex::Regex;

use lex_core::entities::{Issue, KIND_PLACEHOLDER_ISSUE};
use lex_core::enums::{IssueSource, Severity};
use lex_core::offsets::char_span;

/// Suggestion attached to every placeholder issue.
pub const PLACEHOLDER_SUGGESTION: &str = "Verify placeholder content";

/// A placeholder syntax recognised by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderFamily {
    /// `{name}`, `{0}`
    Brace,
    /// `%s`, `%d`
    Printf,
    /// `${name}`
    Shell,
    /// `%(name)s`
    Keyword,
}

impl PlaceholderFamily {
    /// All families, in the order their passes run.
    pub const ALL: [Self; 4] = [Self::Brace, Self::Printf, Self::Shell, Self::Keyword];

    /// Lower-case description used in issue reasons.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Brace => "curly brace placeholder",
            Self::Printf => "printf-style placeholder",
            Self::Shell => "shell-style placeholder",
            Self::Keyword => "python-style placeholder",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Brace => &BRACE,
            Self::Printf => &PRINTF,
            Self::Shell => &SHELL,
            Self::Keyword => &KEYWORD,
        }
    }

    /// Delimiter-stripped name of a matched placeholder.
    fn name(self, placeholder: &str) -> &str {
        let inner = match self {
            Self::Brace => placeholder.strip_prefix('{').and_then(|p| p.strip_suffix('}')),
            Self::Printf => Some(""),
            Self::Shell => placeholder.strip_prefix("${").and_then(|p| p.strip_suffix('}')),
            Self::Keyword => placeholder
                .strip_prefix("%(")
                .and_then(|p| p.get(..p.len().saturating_sub(2))),
        };
        inner.unwrap_or_default()
    }
}

static BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static PRINTF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[sd]").unwrap());
static SHELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%\([^)]+\)[sd]").unwrap());

/// Whether a matched placeholder is empty or minimal.
#[must_use]
pub fn is_minimal(family: PlaceholderFamily, placeholder: &str) -> bool {
    matches!(placeholder, "{}" | "%s" | "%d") || family.name(placeholder).is_empty()
}

/// Run every family pass over `text`.
#[must_use]
pub fn validate(text: &str) -> Vec<Issue> {
    PlaceholderFamily::ALL
        .into_iter()
        .flat_map(|family| validate_family(text, family))
        .collect()
}

fn validate_family(text: &str, family: PlaceholderFamily) -> Vec<Issue> {
    family
        .pattern()
        .find_iter(text)
        .filter(|found| is_minimal(family, found.as_str()))
        .map(|found| {
            let (start, end) = char_span(text, found.range());
            Issue {
                kind: KIND_PLACEHOLDER_ISSUE.to_string(),
                original: found.as_str().to_string(),
                suggestion: PLACEHOLDER_SUGGESTION.to_string(),
                start,
                end,
                severity: Severity::Warning,
                reason: format!("Empty or minimal {}", family.description()),
                source: IssueSource::Validation,
                definition: None,
            }
        })
        .collect()
}
