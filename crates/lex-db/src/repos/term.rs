//! Term store: insert, listing, search, and literal term matching.

use std::cmp::Reverse;

use chrono::Utc;
use regex::RegexBuilder;

use lex_core::entities::{Issue, KIND_TERMINOLOGY_MATCH, Term};
use lex_core::enums::{IssueSource, TermType};
use lex_core::offsets::{char_len, char_span};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, non_empty, parse_datetime};
use crate::inputs::NewTerm;
use crate::store::LexStore;

/// Maximum number of rows `search_terms` returns.
pub const SEARCH_LIMIT: i64 = 50;

const TERM_COLUMNS: &str = "id, source_lang, target_lang, source_term, target_term, term_type, \
                            domain, definition, usage_note, source_file, created_at";

fn row_to_term(row: &libsql::Row) -> Result<Term, DatabaseError> {
    Ok(Term {
        id: row.get::<i64>(0)?,
        source_lang: row.get::<String>(1)?,
        target_lang: row.get::<String>(2)?,
        source_term: row.get::<String>(3)?,
        target_term: row.get::<String>(4)?,
        term_type: TermType::from_stored(&row.get::<String>(5)?),
        domain: get_opt_string(row, 6)?,
        definition: get_opt_string(row, 7)?,
        usage_note: get_opt_string(row, 8)?,
        source_file: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

async fn collect_terms(mut rows: libsql::Rows) -> Result<Vec<Term>, DatabaseError> {
    let mut terms = Vec::new();
    while let Some(row) = rows.next().await? {
        terms.push(row_to_term(&row)?);
    }
    Ok(terms)
}

fn suggestion_reason(domain: Option<&str>) -> String {
    domain.map_or_else(
        || "Terminology database suggestion".to_string(),
        |domain| format!("Terminology database suggestion ({domain})"),
    )
}

impl LexStore {
    /// Insert a term pair.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidRecord` if a required field is empty, or a
    /// libSQL error if the insert fails.
    pub async fn add_term(&self, input: &NewTerm) -> Result<Term, DatabaseError> {
        input.validate()?;
        let now = Utc::now();
        let domain = non_empty(input.domain.as_deref());
        let definition = non_empty(input.definition.as_deref());
        let usage_note = non_empty(input.usage_note.as_deref());
        let source_file = non_empty(input.source_file.as_deref());

        self.db()
            .conn()
            .execute(
                "INSERT INTO terms (source_lang, target_lang, source_term, target_term, term_type,
                                    domain, definition, usage_note, source_file, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                libsql::params![
                    input.source_lang.as_str(),
                    input.target_lang.as_str(),
                    input.source_term.as_str(),
                    input.target_term.as_str(),
                    input.term_type.as_str(),
                    domain,
                    definition,
                    usage_note,
                    source_file,
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::debug!(id, source = %input.source_term, target = %input.target_term, "term added");

        Ok(Term {
            id,
            source_lang: input.source_lang.clone(),
            target_lang: input.target_lang.clone(),
            source_term: input.source_term.clone(),
            target_term: input.target_term.clone(),
            term_type: input.term_type,
            domain: domain.map(String::from),
            definition: definition.map(String::from),
            usage_note: usage_note.map(String::from),
            source_file: source_file.map(String::from),
            created_at: now,
        })
    }

    /// Find every stored term of `source_lang` occurring in `text`.
    ///
    /// Candidates are scanned preferred first, then longest `source_term`
    /// first, then by id. Each candidate is matched as an escaped literal,
    /// case-insensitively; all non-overlapping occurrences are reported.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the candidate query fails.
    pub async fn find_suggestions(
        &self,
        text: &str,
        source_lang: &str,
    ) -> Result<Vec<Issue>, DatabaseError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {TERM_COLUMNS} FROM terms
                     WHERE source_lang = ?1 AND instr(lower(?2), lower(source_term)) > 0"
                ),
                libsql::params![source_lang, text],
            )
            .await?;
        let mut candidates = collect_terms(rows).await?;
        candidates.sort_by_key(|term| {
            (
                term.term_type.rank(),
                Reverse(char_len(&term.source_term)),
                term.id,
            )
        });

        let mut issues = Vec::new();
        for term in &candidates {
            let matcher = match RegexBuilder::new(&regex::escape(&term.source_term))
                .case_insensitive(true)
                .build()
            {
                Ok(matcher) => matcher,
                Err(error) => {
                    tracing::warn!(term_id = term.id, %error, "term cannot be matched; skipping");
                    continue;
                }
            };
            for found in matcher.find_iter(text) {
                let (start, end) = char_span(text, found.range());
                issues.push(Issue {
                    kind: KIND_TERMINOLOGY_MATCH.to_string(),
                    original: found.as_str().to_string(),
                    suggestion: term.target_term.clone(),
                    start,
                    end,
                    severity: term.term_type.suggestion_severity(),
                    reason: suggestion_reason(term.domain.as_deref()),
                    source: IssueSource::Database,
                    definition: term.definition.clone(),
                });
            }
        }

        tracing::debug!(source_lang, candidates = candidates.len(), issues = issues.len(), "term scan");
        Ok(issues)
    }

    /// List terms with the given source language, ordered by `source_term`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn terms_by_language(
        &self,
        source_lang: &str,
        limit: u32,
    ) -> Result<Vec<Term>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {TERM_COLUMNS} FROM terms WHERE source_lang = ?1
                     ORDER BY source_term, id LIMIT ?2"
                ),
                libsql::params![source_lang, i64::from(limit)],
            )
            .await?;
        collect_terms(rows).await
    }

    /// Case-insensitive substring search over source and target terms.
    ///
    /// When `lang` is given, either side's language must equal it. At most
    /// [`SEARCH_LIMIT`] rows are returned, ordered by `source_term`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn search_terms(
        &self,
        query: &str,
        lang: Option<&str>,
    ) -> Result<Vec<Term>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {TERM_COLUMNS} FROM terms
                     WHERE (instr(lower(source_term), lower(?1)) > 0
                            OR instr(lower(target_term), lower(?1)) > 0)
                       AND (?2 IS NULL OR source_lang = ?2 OR target_lang = ?2)
                     ORDER BY source_term, id LIMIT ?3"
                ),
                libsql::params![query, lang, SEARCH_LIMIT],
            )
            .await?;
        collect_terms(rows).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use lex_core::enums::Severity;

    use super::*;
    use crate::test_support::{add_en_term, test_store};

    #[tokio::test]
    async fn add_term_roundtrips_metadata() {
        let store = test_store().await;
        let added = store
            .add_term(
                &NewTerm::new("en", "jp", "Settings", "設定")
                    .domain("navigation")
                    .definition("App preferences screen")
                    .usage_note(" "),
            )
            .await
            .unwrap();
        assert!(added.usage_note.is_none());

        let listed = store.terms_by_language("en", 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, added.id);
        assert_eq!(listed[0].domain.as_deref(), Some("navigation"));
        assert_eq!(listed[0].definition.as_deref(), Some("App preferences screen"));
        assert_eq!(listed[0].term_type, TermType::Preferred);
    }

    #[tokio::test]
    async fn add_term_rejects_empty_source() {
        let store = test_store().await;
        let result = store.add_term(&NewTerm::new("en", "jp", "", "x")).await;
        assert!(matches!(result, Err(DatabaseError::InvalidRecord(_))));
        assert!(store.terms_by_language("en", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn suggestions_cover_every_occurrence() {
        let store = test_store().await;
        add_en_term(&store, "Settings", "設定", TermType::Preferred).await;

        let text = "Open Settings, then SETTINGS again";
        let issues = store.find_suggestions(text, "en").await.unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].original, "Settings");
        assert_eq!((issues[0].start, issues[0].end), (5, 13));
        assert_eq!(issues[1].original, "SETTINGS");
        for issue in &issues {
            assert_eq!(issue.kind, KIND_TERMINOLOGY_MATCH);
            assert_eq!(issue.suggestion, "設定");
            assert_eq!(issue.severity, Severity::Info);
            assert_eq!(issue.source, IssueSource::Database);
            assert_eq!(issue.reason, "Terminology database suggestion");
            assert_eq!(issue.span(text), Some(issue.original.as_str()));
        }
    }

    #[tokio::test]
    async fn suggestions_treat_terms_as_literals() {
        let store = test_store().await;
        add_en_term(&store, "C++ (beta)", "C++（ベータ）", TermType::Admitted).await;

        let issues = store.find_suggestions("Try c++ (BETA) today", "en").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original, "c++ (BETA)");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[tokio::test]
    async fn suggestions_order_preferred_then_longest() {
        let store = test_store().await;
        let deprecated = add_en_term(&store, "Sign-in page", "旧", TermType::Deprecated).await;
        let short = add_en_term(&store, "Sign", "署名", TermType::Preferred).await;
        let long = add_en_term(&store, "Sign-in", "サインイン", TermType::Preferred).await;

        let issues = store.find_suggestions("Sign-in page", "en").await.unwrap();
        let suggestions: Vec<&str> = issues.iter().map(|i| i.suggestion.as_str()).collect();
        assert_eq!(suggestions, vec!["サインイン", "署名", "旧"]);
        assert!(long > short && deprecated < short);
    }

    #[tokio::test]
    async fn suggestions_carry_domain_and_definition() {
        let store = test_store().await;
        store
            .add_term(
                &NewTerm::new("en", "jp", "Cancel", "キャンセル")
                    .domain("ui")
                    .definition("Abort the current action"),
            )
            .await
            .unwrap();

        let issues = store.find_suggestions("Cancel", "en").await.unwrap();
        assert_eq!(issues[0].reason, "Terminology database suggestion (ui)");
        assert_eq!(issues[0].definition.as_deref(), Some("Abort the current action"));
    }

    #[tokio::test]
    async fn suggestions_use_character_offsets() {
        let store = test_store().await;
        store
            .add_term(&NewTerm::new("jp", "en", "設定", "Settings"))
            .await
            .unwrap();

        let issues = store.find_suggestions("画面の設定を開く", "jp").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!((issues[0].start, issues[0].end), (3, 5));
    }

    #[tokio::test]
    async fn suggestions_ignore_other_languages() {
        let store = test_store().await;
        add_en_term(&store, "Settings", "設定", TermType::Preferred).await;
        assert!(store.find_suggestions("Settings", "jp").await.unwrap().is_empty());
        assert!(store.find_suggestions("", "en").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_stored_term_type_is_treated_as_admitted() {
        let store = test_store().await;
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO terms (source_lang, target_lang, source_term, target_term, term_type)
                 VALUES ('en', 'jp', 'Home', 'ホーム', 'fullForm')",
                (),
            )
            .await
            .unwrap();

        let issues = store.find_suggestions("Go Home", "en").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[tokio::test]
    async fn search_matches_either_side_case_insensitively() {
        let store = test_store().await;
        add_en_term(&store, "Settings", "設定", TermType::Preferred).await;
        add_en_term(&store, "Account settings", "アカウント設定", TermType::Preferred).await;
        add_en_term(&store, "Cancel", "キャンセル", TermType::Preferred).await;

        let by_source = store.search_terms("SETTINGS", None).await.unwrap();
        let names: Vec<&str> = by_source.iter().map(|t| t.source_term.as_str()).collect();
        assert_eq!(names, vec!["Account settings", "Settings"]);

        let by_target = store.search_terms("キャンセル", Some("jp")).await.unwrap();
        assert_eq!(by_target.len(), 1);
        assert!(store.search_terms("Cancel", Some("fr")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_is_capped() {
        let store = test_store().await;
        for n in 0..60 {
            add_en_term(&store, &format!("Item {n:02}"), "項目", TermType::Preferred).await;
        }
        let found = store.search_terms("item", Some("en")).await.unwrap();
        assert_eq!(found.len(), 50);
        assert_eq!(found[0].source_term, "Item 00");
    }

    #[tokio::test]
    async fn listing_respects_limit() {
        let store = test_store().await;
        add_en_term(&store, "b", "ビー", TermType::Preferred).await;
        add_en_term(&store, "a", "エー", TermType::Preferred).await;
        let terms = store.terms_by_language("en", 1).await.unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].source_term, "a");
    }
}
