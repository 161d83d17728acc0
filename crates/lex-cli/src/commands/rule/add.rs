use anyhow::Context;
use lex_core::enums::Severity;
use lex_db::inputs::NewRule;
use lex_db::repos::rule::compile_pattern;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn build(
    lang: &str,
    pattern: &str,
    replacement: &str,
    rule_type: Option<&str>,
    severity: Option<&str>,
    description: Option<&str>,
) -> anyhow::Result<NewRule> {
    let severity = severity
        .map(|value| parse_enum::<Severity>(value, "severity"))
        .transpose()?
        .unwrap_or_default();

    let mut input = NewRule::new(lang, pattern, replacement).severity(severity);
    if let Some(rule_type) = rule_type {
        input = input.rule_type(rule_type.trim());
    }
    if let Some(description) = description {
        input = input.description(description);
    }
    input.validate()?;

    if let Err(error) = compile_pattern(pattern) {
        tracing::warn!(%pattern, %error, "pattern does not compile; the rule will be skipped when checking");
    }
    Ok(input)
}

pub async fn run(input: &NewRule, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rule = ctx
        .checker
        .store()
        .add_rule(input)
        .await
        .with_context(|| format!("failed to add rule '{}'", input.pattern))?;
    output(&rule, flags.format)
}
