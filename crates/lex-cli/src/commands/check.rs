use std::io::Read;

use anyhow::{Context, bail};

use crate::cli::root_commands::CheckArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lex check`.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = resolve_text(args.text.as_deref(), std::io::stdin())?;
    if !ctx.checker.supports(&args.lang) {
        tracing::warn!(
            language = %args.lang,
            supported = ?ctx.config.check.supported_languages,
            "language is not supported; no checks will run"
        );
    }

    let report = ctx
        .checker
        .check_report(&text, &args.lang, args.context.as_deref())
        .await;

    match flags.format {
        OutputFormat::Table => output(&report.issues, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

/// Use the argument text, or read it from `input` when absent or `-`.
fn resolve_text<R: Read>(arg: Option<&str>, mut input: R) -> anyhow::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut text = String::new();
            input
                .read_to_string(&mut text)
                .context("failed to read text from stdin")?;
            let text = text.strip_suffix('\n').unwrap_or(&text);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text.is_empty() {
                bail!("no text to check: pass TEXT or pipe it on stdin");
            }
            Ok(text.to_string())
        }
    }
}
