//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lex_config::LexConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/terms.db"

[check]
supported_languages = ["en", "jp", "de"]
digest_rule_limit = 5

[analysis]
endpoint = "http://127.0.0.1:8787/analyze"
timeout_ms = 2500
"#,
        )?;

        let config: LexConfig = Figment::from(Serialized::defaults(LexConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./data/terms.db");
        assert!(config.check.supports("de"));
        assert_eq!(config.check.digest_rule_limit, 5);
        assert_eq!(config.check.digest_term_limit, 20);
        assert!(config.analysis.is_configured());
        assert_eq!(config.analysis.timeout_ms, 2500);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("LEXICON_DATABASE__PATH", "from-env.db");
        jail.set_env("LEXICON_ANALYSIS__TIMEOUT_MS", "1500");

        let config: LexConfig = Figment::from(Serialized::defaults(LexConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LEXICON_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        assert_eq!(config.analysis.timeout_ms, 1500);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lexicon")?;
        jail.create_file(
            ".lexicon/config.toml",
            r#"
[general]
default_limit = 42
"#,
        )?;

        let config = LexConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 42);
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LEXICON_ANALYSIS__TIMEOUT_MS", "0");
        assert!(LexConfig::load().is_err());
        Ok(())
    });
}
