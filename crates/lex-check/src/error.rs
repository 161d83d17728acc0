//! Checking engine error types.

use thiserror::Error;

use lex_db::error::DatabaseError;

/// Errors raised while constructing a `Checker`.
///
/// Once built, a `Checker` never surfaces errors from `check`: failing
/// sources are logged and contribute no issues.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The term database could not be opened.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// The external analyzer could not be constructed.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Errors from an external analysis source.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The analyzer did not answer within the configured budget.
    #[error("analysis timed out after {0} ms")]
    Timeout(u64),

    /// The analyzer is not usable with the given configuration.
    #[error("analyzer not configured: {0}")]
    NotConfigured(String),
}
