use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IssueSource, Severity};
use crate::offsets;

/// Issue kind emitted for term store suggestions.
pub const KIND_TERMINOLOGY_MATCH: &str = "terminology_match";

/// Issue kind emitted by the placeholder validator.
pub const KIND_PLACEHOLDER_ISSUE: &str = "placeholder_issue";

/// One flagged span of input text with a suggested replacement.
///
/// `start` and `end` are character offsets into the checked text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: String,
    pub original: String,
    pub suggestion: String,
    pub start: usize,
    pub end: usize,
    pub severity: Severity,
    pub reason: String,
    pub source: IssueSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

/// Identity of an issue for deduplication: `(start, end, original, kind)`.
pub type IssueKey<'a> = (usize, usize, &'a str, &'a str);

impl Issue {
    /// The deduplication key of this issue.
    #[must_use]
    pub fn key(&self) -> IssueKey<'_> {
        (self.start, self.end, self.original.as_str(), self.kind.as_str())
    }

    /// The span of `text` this issue covers, if its offsets are in bounds.
    #[must_use]
    pub fn span<'t>(&self, text: &'t str) -> Option<&'t str> {
        offsets::slice_chars(text, self.start, self.end)
    }

    /// Whether `0 <= start <= end <= len(text)` holds.
    #[must_use]
    pub fn in_bounds(&self, text: &str) -> bool {
        self.start <= self.end && self.end <= offsets::char_len(text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn login_issue() -> Issue {
        Issue {
            kind: "preferred_synonym".to_string(),
            original: "login".to_string(),
            suggestion: "sign in".to_string(),
            start: 7,
            end: 12,
            severity: Severity::Warning,
            reason: "Prefer \"sign in\" over \"login\"".to_string(),
            source: IssueSource::Rules,
            definition: None,
        }
    }

    #[test]
    fn serializes_with_transport_field_names() {
        let json = serde_json::to_value(login_issue()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "preferred_synonym",
                "original": "login",
                "suggestion": "sign in",
                "start": 7,
                "end": 12,
                "severity": "warning",
                "reason": "Prefer \"sign in\" over \"login\"",
                "source": "rules",
            })
        );
    }

    #[test]
    fn definition_is_emitted_when_present() {
        let mut issue = login_issue();
        issue.definition = Some("Authenticate a user".to_string());
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["definition"], "Authenticate a user");
    }

    #[test]
    fn span_matches_original() {
        let text = "Please login to continue";
        let issue = login_issue();
        assert_eq!(issue.span(text), Some("login"));
        assert!(issue.in_bounds(text));
        assert!(!issue.in_bounds("short"));
    }

    #[test]
    fn key_ignores_suggestion_and_source() {
        let a = login_issue();
        let mut b = login_issue();
        b.suggestion = "log in".to_string();
        b.source = IssueSource::External;
        assert_eq!(a.key(), b.key());
    }
}
