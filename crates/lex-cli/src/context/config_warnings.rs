use lex_config::LexConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LexConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LexConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.analysis.is_configured() && has_env_prefix(&env_keys, "LEXICON_ANALYSIS") {
        warnings.push(
            "Analysis config appears default while LEXICON_ANALYSIS* env vars exist. Use double underscores (example: LEXICON_ANALYSIS__ENDPOINT)."
                .to_string(),
        );
    }

    if config.database.path == lex_config::DatabaseConfig::default().path
        && has_env_prefix(&env_keys, "LEXICON_DATABASE")
    {
        warnings.push(
            "Database path appears default while LEXICON_DATABASE* env vars exist. Use double underscores (example: LEXICON_DATABASE__PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&format!("{prefix}__")))
}
