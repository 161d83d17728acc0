//! External analysis sources.
//!
//! An [`Analyzer`] receives the text under check plus a terminology digest
//! and returns extra issues. Anything it reports is re-validated against the
//! text by [`parse_candidates`]: candidates that cannot be positioned inside
//! the text are dropped, and every surviving issue is marked `external`.

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use lex_config::AnalysisConfig;
use lex_core::entities::Issue;
use lex_core::enums::{IssueSource, Severity};
use lex_core::offsets::{char_len, find_chars};

use crate::error::AnalysisError;

/// Everything an analyzer is given for one check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Terminology digest for `language`.
    pub digest: String,
}

/// A source of issues beyond the local stores.
pub trait Analyzer: Send + Sync {
    /// Short name reported alongside check results.
    fn name(&self) -> &str;

    /// Analyze one request.
    fn analyze<'a>(
        &'a self,
        request: &'a AnalysisRequest,
    ) -> BoxFuture<'a, Result<Vec<Issue>, AnalysisError>>;
}

/// Analyzer that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalyzer;

impl Analyzer for NoopAnalyzer {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn analyze<'a>(
        &'a self,
        _request: &'a AnalysisRequest,
    ) -> BoxFuture<'a, Result<Vec<Issue>, AnalysisError>> {
        async { Ok(Vec::new()) }.boxed()
    }
}

/// Posts the request as JSON to an endpoint answering `{"issues": [...]}`.
pub struct HttpAnalyzer {
    http: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpAnalyzer {
    /// Build an analyzer for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotConfigured`] for an empty endpoint, or
    /// [`AnalysisError::Http`] if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AnalysisError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(AnalysisError::NotConfigured("endpoint is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("lexicon/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint,
            auth_token: auth_token.filter(|token| !token.is_empty()),
        })
    }

    /// Build an analyzer from configuration, or `None` when no endpoint is set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AnalysisConfig) -> Result<Option<Self>, AnalysisError> {
        if !config.is_configured() {
            return Ok(None);
        }
        Self::new(
            config.endpoint.clone(),
            Some(config.auth_token.clone()),
            config.timeout(),
        )
        .map(Some)
    }

    /// The endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &AnalysisRequest) -> Result<Vec<Issue>, AnalysisError> {
        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        let resp = builder.send().await?;
        if !resp.status().is_success() {
            return Err(AnalysisError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        let body = resp.text().await?;
        parse_candidates(&body, &request.text)
    }
}

impl Analyzer for HttpAnalyzer {
    fn name(&self) -> &'static str {
        "http"
    }

    fn analyze<'a>(
        &'a self,
        request: &'a AnalysisRequest,
    ) -> BoxFuture<'a, Result<Vec<Issue>, AnalysisError>> {
        self.post(request).boxed()
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    issues: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(rename = "type")]
    kind: String,
    original: String,
    suggestion: String,
    severity: String,
    reason: String,
    start: Option<i64>,
    end: Option<i64>,
    #[serde(default)]
    definition: Option<String>,
}

/// Turn an analyzer response body into issues positioned within `text`.
///
/// A candidate missing any of `type`, `original`, `suggestion`, `severity`,
/// or `reason` is dropped, as is one with an unknown severity. A missing
/// `start` is found by locating `original` in `text`; a missing `end` is
/// `start` plus the length of `original`. Offsets are characters.
///
/// # Errors
///
/// Returns [`AnalysisError::Malformed`] if `body` is not a JSON object.
pub fn parse_candidates(body: &str, text: &str) -> Result<Vec<Issue>, AnalysisError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| AnalysisError::Malformed(e.to_string()))?;

    let issues: Vec<Issue> = envelope
        .issues
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Candidate>(value) {
            Ok(candidate) => position(candidate, text),
            Err(error) => {
                tracing::debug!(%error, "dropping incomplete analysis candidate");
                None
            }
        })
        .collect();
    Ok(issues)
}

fn position(candidate: Candidate, text: &str) -> Option<Issue> {
    let Ok(severity) =
        serde_json::from_value::<Severity>(serde_json::Value::String(candidate.severity.clone()))
    else {
        tracing::debug!(severity = %candidate.severity, "dropping candidate with unknown severity");
        return None;
    };

    let start = match candidate.start {
        Some(start) => usize::try_from(start).ok()?,
        None => find_chars(text, &candidate.original)?,
    };
    let end = match candidate.end {
        Some(end) => usize::try_from(end).ok()?,
        None => start + char_len(&candidate.original),
    };

    let issue = Issue {
        kind: candidate.kind,
        original: candidate.original,
        suggestion: candidate.suggestion,
        start,
        end,
        severity,
        reason: candidate.reason,
        source: IssueSource::External,
        definition: candidate.definition,
    };
    if issue.in_bounds(text) {
        Some(issue)
    } else {
        tracing::debug!(start, end, "dropping candidate outside the text");
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEXT: &str = "Please login to continue";

    #[test]
    fn explicit_offsets_are_kept() {
        let body = r#"{"issues": [{"type": "terminology_suggestion", "original": "login",
            "suggestion": "sign in", "start": 7, "end": 12, "severity": "warning",
            "reason": "Prefer sign in", "source": "llm_analysis"}]}"#;
        let issues = parse_candidates(body, TEXT).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!((issues[0].start, issues[0].end), (7, 12));
        assert_eq!(issues[0].kind, "terminology_suggestion");
        assert_eq!(issues[0].source, IssueSource::External);
    }

    #[test]
    fn missing_offsets_are_located() {
        let body = r#"{"issues": [{"type": "t", "original": "continue",
            "suggestion": "proceed", "severity": "info", "reason": "r"}]}"#;
        let issues = parse_candidates(body, TEXT).unwrap();
        assert_eq!((issues[0].start, issues[0].end), (16, 24));
    }

    #[test]
    fn located_offsets_count_characters() {
        let body = r#"{"issues": [{"type": "t", "original": "サインイン",
            "suggestion": "ログイン", "severity": "info", "reason": "r"}]}"#;
        let issues = parse_candidates(body, "まずサインイン").unwrap();
        assert_eq!((issues[0].start, issues[0].end), (2, 7));
    }

    #[test]
    fn unplaceable_candidates_are_dropped() {
        let body = r#"{"issues": [
            {"type": "t", "original": "absent", "suggestion": "s", "severity": "info", "reason": "r"},
            {"type": "t", "original": "login", "suggestion": "s", "start": 20, "end": 40, "severity": "info", "reason": "r"},
            {"type": "t", "original": "login", "suggestion": "s", "start": -1, "severity": "info", "reason": "r"},
            {"type": "t", "original": "login", "suggestion": "s", "start": 9, "end": 7, "severity": "info", "reason": "r"}
        ]}"#;
        assert!(parse_candidates(body, TEXT).unwrap().is_empty());
    }

    #[test]
    fn incomplete_or_unknown_severity_candidates_are_dropped() {
        let body = r#"{"issues": [
            {"type": "t", "original": "login", "severity": "info", "reason": "r"},
            {"type": "t", "original": "login", "suggestion": "s", "severity": "critical", "reason": "r"},
            {"type": "t", "original": "login", "suggestion": "s", "severity": "error", "reason": "r"}
        ]}"#;
        let issues = parse_candidates(body, TEXT).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn missing_issue_list_is_empty() {
        assert!(parse_candidates("{}", TEXT).unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_candidates("not json", TEXT).unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let result = HttpAnalyzer::new("  ", None, Duration::from_secs(1));
        assert!(matches!(result, Err(AnalysisError::NotConfigured(_))));
    }

    #[test]
    fn unconfigured_analysis_builds_nothing() {
        let analyzer = HttpAnalyzer::from_config(&AnalysisConfig::default()).unwrap();
        assert!(analyzer.is_none());
    }

    #[tokio::test]
    async fn noop_reports_nothing() {
        let request = AnalysisRequest {
            text: TEXT.to_string(),
            language: "en".to_string(),
            context: None,
            digest: String::new(),
        };
        assert!(NoopAnalyzer.analyze(&request).await.unwrap().is_empty());
    }
}
