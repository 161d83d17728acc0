use anyhow::{Context, bail};
use lex_config::LexConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LexConfig> {
    let mut config = LexConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut LexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(db) = &flags.db {
        if db.trim().is_empty() {
            bail!("--db must not be empty");
        }
        config.database.path.clone_from(db);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use lex_config::LexConfig;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            db: db.map(str::to_string),
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn db_flag_overrides_configured_path() {
        let mut config = LexConfig::default();
        apply_overrides(&mut config, &flags(Some("/tmp/other.db"))).expect("override should apply");
        assert_eq!(config.database.path, "/tmp/other.db");
    }

    #[test]
    fn missing_db_flag_keeps_configured_path() {
        let mut config = LexConfig::default();
        apply_overrides(&mut config, &flags(None)).expect("no override");
        assert_eq!(config.database.path, ".lexicon/terms.db");
    }

    #[test]
    fn blank_db_flag_is_rejected() {
        let mut config = LexConfig::default();
        let err = apply_overrides(&mut config, &flags(Some(" "))).expect_err("should fail");
        assert!(err.to_string().contains("--db"));
    }
}
