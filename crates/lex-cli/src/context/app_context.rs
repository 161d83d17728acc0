use anyhow::Context;
use lex_check::Checker;
use lex_config::LexConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub checker: Checker,
    pub config: LexConfig,
}

impl AppContext {
    /// Open the configured term database and external analyzer.
    pub async fn init(config: LexConfig) -> anyhow::Result<Self> {
        let checker = Checker::open(&config).await.with_context(|| {
            format!(
                "failed to open term database at {}",
                config.database.path
            )
        })?;
        tracing::debug!(path = %config.database.path, "application context ready");
        Ok(Self { checker, config })
    }
}
