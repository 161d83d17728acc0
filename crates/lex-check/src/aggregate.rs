//! Merging issues from every source into one ordered list.

use std::collections::HashSet;

use lex_core::entities::Issue;

/// Deduplicate and order issues.
///
/// Issues sharing an [`Issue::key`] collapse to the first one
/// seen, so the caller's merge order decides which source wins. The result
/// is stably sorted by `start`; overlapping spans are kept as they are.
#[must_use]
pub fn aggregate(issues: Vec<Issue>) -> Vec<Issue> {
    let first_seen: Vec<bool> = {
        let mut seen = HashSet::new();
        issues.iter().map(|issue| seen.insert(issue.key())).collect()
    };
    let mut merged: Vec<Issue> = issues
        .into_iter()
        .zip(first_seen)
        .filter_map(|(issue, first)| first.then_some(issue))
        .collect();
    merged.sort_by_key(|issue| issue.start);
    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use lex_core::enums::{IssueSource, Severity};

    use super::*;

    fn issue(kind: &str, original: &str, start: usize, source: IssueSource) -> Issue {
        Issue {
            kind: kind.to_string(),
            original: original.to_string(),
            suggestion: format!("{source} suggestion"),
            start,
            end: start + original.chars().count(),
            severity: Severity::Warning,
            reason: String::new(),
            source,
            definition: None,
        }
    }

    #[test]
    fn first_duplicate_wins() {
        let merged = aggregate(vec![
            issue("preferred_synonym", "login", 7, IssueSource::Rules),
            issue("preferred_synonym", "login", 7, IssueSource::External),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].source, IssueSource::Rules);
    }

    #[test]
    fn suggestion_and_severity_are_not_part_of_the_key() {
        let mut later = issue("preferred_synonym", "login", 7, IssueSource::Database);
        later.severity = Severity::Error;
        let merged = aggregate(vec![
            issue("preferred_synonym", "login", 7, IssueSource::Rules),
            later,
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].suggestion, "rules suggestion");
        assert_eq!(merged[0].severity, Severity::Warning);
    }

    #[test]
    fn different_kinds_on_one_span_are_kept() {
        let merged = aggregate(vec![
            issue("terminology_match", "login", 7, IssueSource::Database),
            issue("preferred_synonym", "login", 7, IssueSource::Rules),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].source, IssueSource::Database);
    }

    #[test]
    fn sort_is_stable_by_start() {
        let merged = aggregate(vec![
            issue("a", "e-mail", 22, IssueSource::Rules),
            issue("b", "login", 7, IssueSource::Rules),
            issue("c", "log", 7, IssueSource::External),
            issue("d", "Please", 0, IssueSource::External),
        ]);
        let kinds: Vec<&str> = merged.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn overlapping_spans_are_left_alone() {
        let merged = aggregate(vec![
            issue("terminology_match", "Sign-in", 0, IssueSource::Database),
            issue("terminology_match", "Sign", 0, IssueSource::Database),
        ]);
        assert_eq!(merged.len(), 2);
    }
}
