use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(lang: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rules = ctx.checker.store().rules_by_language(lang).await?;
    apply_limit(&mut rules, flags.limit);
    output(&rules, flags.format)
}
