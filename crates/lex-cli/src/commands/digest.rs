use serde::Serialize;

use crate::cli::root_commands::DigestArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DigestResponse {
    language: String,
    digest: String,
}

/// Handle `lex digest`.
pub async fn handle(args: &DigestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let digest = ctx.checker.terminology_digest(&args.lang).await;
    match flags.format {
        OutputFormat::Table => {
            println!("{digest}");
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(
            &DigestResponse {
                language: args.lang.clone(),
                digest,
            },
            flags.format,
        ),
    }
}
