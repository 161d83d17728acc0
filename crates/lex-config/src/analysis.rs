//! External analysis endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default upper bound on one external analysis call, in milliseconds.
const fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// URL that receives analysis requests as JSON (empty disables analysis).
    #[serde(default)]
    pub endpoint: String,

    /// Bearer token sent with each request, if non-empty.
    #[serde(default)]
    pub auth_token: String,

    /// Upper bound on one analysis call. On expiry the call contributes no issues.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            auth_token: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AnalysisConfig {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}
