//! Rule store: insert, listing, and regex rule application.

use chrono::Utc;
use regex::{Regex, RegexBuilder};

use lex_core::entities::{Issue, Rule};
use lex_core::enums::{IssueSource, RuleType, Severity};
use lex_core::offsets::char_span;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, non_empty, parse_datetime};
use crate::inputs::NewRule;
use crate::store::LexStore;

const RULE_COLUMNS: &str =
    "id, language, pattern, replacement, rule_type, severity, description, source_file, created_at";

fn row_to_rule(row: &libsql::Row) -> Result<Rule, DatabaseError> {
    Ok(Rule {
        id: row.get::<i64>(0)?,
        language: row.get::<String>(1)?,
        pattern: row.get::<String>(2)?,
        replacement: row.get::<String>(3)?,
        rule_type: RuleType::from(row.get::<String>(4)?),
        severity: Severity::from_stored(&row.get::<String>(5)?),
        description: get_opt_string(row, 6)?,
        source_file: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

/// Read every row, skipping any that cannot be mapped to a `Rule`.
async fn collect_rules(mut rows: libsql::Rows) -> Result<Vec<Rule>, DatabaseError> {
    let mut rules = Vec::new();
    while let Some(row) = rows.next().await? {
        match row_to_rule(&row) {
            Ok(rule) => rules.push(rule),
            Err(error) => {
                let rule_id = row.get::<i64>(0).ok();
                tracing::warn!(?rule_id, %error, "unreadable rule row; skipping");
            }
        }
    }
    Ok(rules)
}

/// Compile a rule pattern the way it is applied: case-insensitively.
///
/// # Errors
///
/// Returns the `regex` error for a pattern that does not compile.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn violation_reason(rule: &Rule) -> String {
    rule.description.clone().unwrap_or_else(|| {
        format!(
            "Rule-based suggestion: {} -> {}",
            rule.pattern, rule.replacement
        )
    })
}

impl LexStore {
    /// Insert a style rule.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidRecord` if a required field is empty, or a
    /// libSQL error if the insert fails.
    pub async fn add_rule(&self, input: &NewRule) -> Result<Rule, DatabaseError> {
        input.validate()?;
        let now = Utc::now();
        let description = non_empty(input.description.as_deref());
        let source_file = non_empty(input.source_file.as_deref());

        self.db()
            .conn()
            .execute(
                "INSERT INTO rules (language, pattern, replacement, rule_type, severity,
                                    description, source_file, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    input.language.as_str(),
                    input.pattern.as_str(),
                    input.replacement.as_str(),
                    input.rule_type.as_str(),
                    input.severity.as_str(),
                    description,
                    source_file,
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::debug!(id, language = %input.language, pattern = %input.pattern, "rule added");

        Ok(Rule {
            id,
            language: input.language.clone(),
            pattern: input.pattern.clone(),
            replacement: input.replacement.clone(),
            rule_type: input.rule_type.clone(),
            severity: input.severity,
            description: description.map(String::from),
            source_file: source_file.map(String::from),
            created_at: now,
        })
    }

    /// Apply every rule for `language` to `text`, in insertion order.
    ///
    /// Patterns are compiled case-insensitively. A pattern that does not
    /// compile is logged and skipped; the remaining rules still apply.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the rules cannot be read.
    pub async fn find_violations(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<Issue>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RULE_COLUMNS} FROM rules WHERE language = ?1 ORDER BY id"),
                [language],
            )
            .await?;
        let rules = collect_rules(rows).await?;

        let mut issues = Vec::new();
        for rule in &rules {
            let pattern = match compile_pattern(&rule.pattern) {
                Ok(pattern) => pattern,
                Err(error) => {
                    tracing::warn!(rule_id = rule.id, pattern = %rule.pattern, %error, "invalid rule pattern; skipping");
                    continue;
                }
            };
            for found in pattern.find_iter(text) {
                let (start, end) = char_span(text, found.range());
                issues.push(Issue {
                    kind: rule.rule_type.to_string(),
                    original: found.as_str().to_string(),
                    suggestion: rule.replacement.clone(),
                    start,
                    end,
                    severity: rule.severity,
                    reason: violation_reason(rule),
                    source: IssueSource::Rules,
                    definition: None,
                });
            }
        }

        tracing::debug!(language, rules = rules.len(), issues = issues.len(), "rule scan");
        Ok(issues)
    }

    /// List rules for `language`, ordered by `rule_type` then `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn rules_by_language(&self, language: &str) -> Result<Vec<Rule>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {RULE_COLUMNS} FROM rules WHERE language = ?1
                     ORDER BY rule_type, pattern, id"
                ),
                [language],
            )
            .await?;
        collect_rules(rows).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use lex_core::enums::Severity;

    use super::*;
    use crate::test_support::test_store;

    #[test]
    fn compiled_patterns_ignore_case() {
        assert!(compile_pattern(r"\bOk\b").unwrap().is_match("ok"));
        assert!(compile_pattern("([unclosed").is_err());
    }

    #[tokio::test]
    async fn seeded_login_rule_fires() {
        let store = test_store().await;
        let text = "Please login to continue";
        let issues = store.find_violations(text, "en").await.unwrap();

        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.kind, "preferred_synonym");
        assert_eq!(issue.original, "login");
        assert_eq!(issue.suggestion, "sign in");
        assert_eq!((issue.start, issue.end), (7, 12));
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.reason, "Prefer \"sign in\" over \"login\"");
        assert_eq!(issue.source, IssueSource::Rules);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive_but_keeps_original_text() {
        let store = test_store().await;
        let issues = store.find_violations("LOGIN now", "en").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original, "LOGIN");
    }

    #[tokio::test]
    async fn japanese_rule_uses_character_offsets() {
        let store = test_store().await;
        let issues = store.find_violations("まずログインしてください", "jp").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].suggestion, "サインイン");
        assert_eq!((issues[0].start, issues[0].end), (2, 6));
    }

    #[tokio::test]
    async fn invalid_pattern_is_skipped() {
        let store = test_store().await;
        let bad = store
            .add_rule(&NewRule::new("en", "([unclosed", "x"))
            .await
            .unwrap();
        assert!(bad.id > 0);

        let issues = store.find_violations("login", "en").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].suggestion, "sign in");
    }

    #[tokio::test]
    async fn reason_falls_back_to_pattern_summary() {
        let store = test_store().await;
        store
            .add_rule(
                &NewRule::new("en", r"\bclick here\b", "select")
                    .rule_type("clarity")
                    .severity(Severity::Error),
            )
            .await
            .unwrap();

        let issues = store.find_violations("Click here to start", "en").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, "clarity");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(
            issues[0].reason,
            r"Rule-based suggestion: \bclick here\b -> select"
        );
    }

    #[tokio::test]
    async fn custom_rule_type_roundtrips() {
        let store = test_store().await;
        store
            .add_rule(&NewRule::new("fr", "courriel", "e-mail").rule_type("house_style"))
            .await
            .unwrap();

        let rules = store.rules_by_language("fr").await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_type, RuleType::Custom("house_style".to_string()));
    }

    #[tokio::test]
    async fn empty_replacement_is_rejected() {
        let store = test_store().await;
        let result = store.add_rule(&NewRule::new("en", "foo", "")).await;
        assert!(matches!(result, Err(DatabaseError::InvalidRecord(_))));
    }

    async fn insert_raw_rule(store: &LexStore, severity: &str, created_at: &str) {
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO rules (language, pattern, replacement, rule_type, severity, created_at)
                 VALUES ('en', 'utilize', 'use', 'clarity', ?1, ?2)",
                libsql::params![severity, created_at],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_stored_severity_reads_as_warning() {
        let store = test_store().await;
        insert_raw_rule(&store, "high", "2026-02-09 14:30:00").await;

        let issues = store
            .find_violations("Please login to continue", "en")
            .await
            .unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original, "login");

        let issues = store.find_violations("utilize it", "en").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(store.rules_by_language("en").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unreadable_row_skips_only_that_rule() {
        let store = test_store().await;
        insert_raw_rule(&store, "warning", "last tuesday").await;

        let issues = store
            .find_violations("Please login to continue", "en")
            .await
            .unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!((issues[0].start, issues[0].end), (7, 12));
        assert_eq!(store.rules_by_language("en").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn listing_orders_by_type_then_pattern() {
        let store = test_store().await;
        store
            .add_rule(&NewRule::new("en", "utilize", "use").rule_type("clarity"))
            .await
            .unwrap();

        let rules = store.rules_by_language("en").await.unwrap();
        let patterns: Vec<&str> = rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(
            patterns,
            vec!["utilize", r"\bLogout\b", r"\bOk\b", r"\be-mail\b", r"\blogin\b"]
        );
    }
}
