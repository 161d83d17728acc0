use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    query: &str,
    lang: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut terms = ctx.checker.store().search_terms(query, lang).await?;
    apply_limit(&mut terms, flags.limit);
    output(&terms, flags.format)
}
