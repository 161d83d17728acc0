//! Checking engine settings.

use serde::{Deserialize, Serialize};

fn default_supported_languages() -> Vec<String> {
    vec!["en".to_string(), "jp".to_string()]
}

const fn default_digest_rule_limit() -> u32 {
    10
}

const fn default_digest_term_limit() -> u32 {
    20
}

const fn default_digest_term_fetch() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Language codes accepted by `check`. Anything else yields no issues.
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,

    /// Rules included in the terminology digest handed to external analysis.
    #[serde(default = "default_digest_rule_limit")]
    pub digest_rule_limit: u32,

    /// Terms included in the terminology digest.
    #[serde(default = "default_digest_term_limit")]
    pub digest_term_limit: u32,

    /// Terms fetched from the store before the digest limit is applied.
    #[serde(default = "default_digest_term_fetch")]
    pub digest_term_fetch: u32,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            supported_languages: default_supported_languages(),
            digest_rule_limit: default_digest_rule_limit(),
            digest_term_limit: default_digest_term_limit(),
            digest_term_fetch: default_digest_term_fetch(),
        }
    }
}

impl CheckConfig {
    pub fn supports(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|lang| lang == language)
    }
}
