//! # lex-config
//!
//! Layered configuration loading for Lexicon using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXICON_*` prefix, `__` as separator)
//! 2. Project-level `.lexicon/config.toml`
//! 3. User-level `~/.config/lexicon/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXICON_DATABASE__PATH` -> `database.path`,
//! `LEXICON_ANALYSIS__TIMEOUT_MS` -> `analysis.timeout_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lex_config::LexConfig;
//!
//! let config = LexConfig::load_with_dotenv().expect("config");
//! if config.analysis.is_configured() {
//!     println!("external analysis at {}", config.analysis.endpoint);
//! }
//! ```

mod analysis;
mod check;
mod database;
mod error;
mod general;

pub use analysis::AnalysisConfig;
pub use check::CheckConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LexConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lexicon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LEXICON_").split("__"))
    }

    /// Reject values that would make the engine misbehave silently.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.analysis.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(lang) = self
            .check
            .supported_languages
            .iter()
            .find(|lang| lang.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "check.supported_languages".to_string(),
                reason: format!("contains an empty language code: {lang:?}"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexicon").join("config.toml"))
    }
}
