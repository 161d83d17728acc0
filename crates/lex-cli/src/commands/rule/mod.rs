mod add;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RuleCommands;
use crate::context::AppContext;

/// Handle `lex rule`.
pub async fn handle(
    action: &RuleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RuleCommands::Add {
            lang,
            pattern,
            replacement,
            rule_type,
            severity,
            description,
        } => {
            let input = add::build(
                lang,
                pattern,
                replacement,
                rule_type.as_deref(),
                severity.as_deref(),
                description.as_deref(),
            )?;
            add::run(&input, ctx, flags).await
        }
        RuleCommands::List { lang } => list::run(lang, ctx, flags).await,
    }
}
