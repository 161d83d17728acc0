mod add;
mod list;
mod search;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TermCommands;
use crate::context::AppContext;

/// Handle `lex term`.
pub async fn handle(
    action: &TermCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TermCommands::Add {
            source_lang,
            target_lang,
            source,
            target,
            term_type,
            domain,
            definition,
            usage_note,
        } => {
            let input = add::build(
                add::TermArgs {
                    source_lang,
                    target_lang,
                    source,
                    target,
                    term_type: term_type.as_deref(),
                    domain: domain.as_deref(),
                    definition: definition.as_deref(),
                    usage_note: usage_note.as_deref(),
                },
            )?;
            add::run(&input, ctx, flags).await
        }
        TermCommands::List { lang } => list::run(lang, ctx, flags).await,
        TermCommands::Search { query, lang } => {
            search::run(query, lang.as_deref(), ctx, flags).await
        }
    }
}
