//! The checking façade.
//!
//! `Checker` runs the term store, rule store, placeholder validator, and the
//! optional external analyzer over one piece of text and merges the results.
//! No source can fail a check: errors are logged and that source contributes
//! nothing.

use std::sync::Arc;
use std::time::Duration;

use lex_config::{CheckConfig, LexConfig};
use lex_core::entities::{Issue, Rule, Term};
use lex_core::enums::IssueSource;
use lex_core::responses::{CheckReport, StoreStatistics};
use lex_db::inputs::{NewRule, NewTerm};
use lex_db::store::LexStore;

use crate::aggregate::aggregate;
use crate::analysis::{AnalysisRequest, Analyzer, HttpAnalyzer};
use crate::error::{AnalysisError, CheckError};
use crate::{digest, placeholder};

/// Terminology checker over one store.
pub struct Checker {
    store: LexStore,
    check: CheckConfig,
    analyzer: Option<Arc<dyn Analyzer>>,
    analysis_timeout: Duration,
}

impl Checker {
    /// Open the configured store and, when an endpoint is set, the HTTP analyzer.
    ///
    /// # Errors
    ///
    /// Returns `CheckError` if the database cannot be opened or the analyzer
    /// cannot be built.
    pub async fn open(config: &LexConfig) -> Result<Self, CheckError> {
        let store = LexStore::new_local(&config.database.path).await?;
        let checker = Self::new(store, config);
        Ok(match HttpAnalyzer::from_config(&config.analysis)? {
            Some(analyzer) => {
                tracing::info!(endpoint = analyzer.endpoint(), "external analysis enabled");
                checker.with_analyzer(Arc::new(analyzer))
            }
            None => checker,
        })
    }

    /// Wrap an open store. No analyzer is attached.
    #[must_use]
    pub fn new(store: LexStore, config: &LexConfig) -> Self {
        Self {
            store,
            check: config.check.clone(),
            analyzer: None,
            analysis_timeout: config.analysis.timeout(),
        }
    }

    /// Attach an external analyzer.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Override how long the external analyzer may take.
    #[must_use]
    pub const fn with_analysis_timeout(mut self, timeout: Duration) -> Self {
        self.analysis_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &LexStore {
        &self.store
    }

    /// Whether `language` is checked at all.
    #[must_use]
    pub fn supports(&self, language: &str) -> bool {
        self.check.supports(language)
    }

    /// Check `text`, returning deduplicated issues ordered by start offset.
    ///
    /// An unsupported language yields no issues.
    pub async fn check(&self, text: &str, language: &str, context: Option<&str>) -> Vec<Issue> {
        self.check_report(text, language, context).await.issues
    }

    /// Check `text` and report whether the external analyzer answered.
    pub async fn check_report(
        &self,
        text: &str,
        language: &str,
        context: Option<&str>,
    ) -> CheckReport {
        let analyzer_name = self.analyzer.as_ref().map(|a| a.name().to_string());
        if !self.supports(language) {
            tracing::debug!(language, "unsupported language; skipping check");
            return CheckReport {
                text: text.to_string(),
                language: language.to_string(),
                issues: Vec::new(),
                analysis_used: false,
                analyzer: analyzer_name,
            };
        }

        let mut issues = or_log(
            self.store.find_suggestions(text, language).await,
            "term store",
        );
        issues.extend(or_log(
            self.store.find_violations(text, language).await,
            "rule store",
        ));
        issues.extend(placeholder::validate(text));

        let analysis_used = match &self.analyzer {
            Some(analyzer) => {
                match self.external_issues(analyzer.as_ref(), text, language, context).await {
                    Ok(found) => {
                        issues.extend(found);
                        true
                    }
                    Err(error) => {
                        tracing::warn!(analyzer = analyzer.name(), %error, "external analysis failed");
                        false
                    }
                }
            }
            None => false,
        };

        let issues = aggregate(issues);
        tracing::debug!(language, issues = issues.len(), "check complete");
        CheckReport {
            text: text.to_string(),
            language: language.to_string(),
            issues,
            analysis_used,
            analyzer: analyzer_name,
        }
    }

    async fn external_issues(
        &self,
        analyzer: &dyn Analyzer,
        text: &str,
        language: &str,
        context: Option<&str>,
    ) -> Result<Vec<Issue>, AnalysisError> {
        let request = AnalysisRequest {
            text: text.to_string(),
            language: language.to_string(),
            context: context.filter(|c| !c.is_empty()).map(String::from),
            digest: self.terminology_digest(language).await,
        };

        let found = tokio::time::timeout(self.analysis_timeout, analyzer.analyze(&request))
            .await
            .map_err(|_| {
                AnalysisError::Timeout(
                    u64::try_from(self.analysis_timeout.as_millis()).unwrap_or(u64::MAX),
                )
            })??;

        Ok(found
            .into_iter()
            .filter(|issue| issue.in_bounds(text))
            .map(|mut issue| {
                issue.source = IssueSource::External;
                issue
            })
            .collect())
    }

    /// Store a term pair. Returns `false` (and logs) if it was rejected.
    pub async fn add_term(&self, term: &NewTerm) -> bool {
        match self.store.add_term(term).await {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(source = %term.source_term, %error, "failed to add term");
                false
            }
        }
    }

    /// Store a style rule. Returns `false` (and logs) if it was rejected.
    pub async fn add_rule(&self, rule: &NewRule) -> bool {
        match self.store.add_rule(rule).await {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(pattern = %rule.pattern, %error, "failed to add rule");
                false
            }
        }
    }

    pub async fn terms_for_language(&self, language: &str, limit: u32) -> Vec<Term> {
        or_log(
            self.store.terms_by_language(language, limit).await,
            "term listing",
        )
    }

    pub async fn rules_for_language(&self, language: &str) -> Vec<Rule> {
        or_log(self.store.rules_by_language(language).await, "rule listing")
    }

    pub async fn search_terms(&self, query: &str, language: Option<&str>) -> Vec<Term> {
        or_log(self.store.search_terms(query, language).await, "term search")
    }

    /// Store statistics; on failure only the database path is filled in.
    pub async fn statistics(&self) -> StoreStatistics {
        match self.store.statistics().await {
            Ok(stats) => stats,
            Err(error) => {
                tracing::warn!(%error, "statistics query failed");
                StoreStatistics {
                    database_path: self.store.path().to_string(),
                    ..StoreStatistics::default()
                }
            }
        }
    }

    /// Render the terminology digest for `language`.
    pub async fn terminology_digest(&self, language: &str) -> String {
        let rules = self.rules_for_language(language).await;
        let terms = self
            .terms_for_language(language, self.check.digest_term_fetch)
            .await;
        digest::render(
            language,
            &rules,
            &terms,
            self.check.digest_rule_limit as usize,
            self.check.digest_term_limit as usize,
        )
    }
}

fn or_log<T: Default>(result: Result<T, lex_db::error::DatabaseError>, what: &str) -> T {
    result.unwrap_or_else(|error| {
        tracing::warn!(source = what, %error, "store query failed");
        T::default()
    })
}
