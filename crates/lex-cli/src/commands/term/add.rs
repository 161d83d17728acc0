use anyhow::Context;
use lex_core::enums::TermType;
use lex_db::inputs::NewTerm;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Borrowed `lex term add` arguments.
pub struct TermArgs<'a> {
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub term_type: Option<&'a str>,
    pub domain: Option<&'a str>,
    pub definition: Option<&'a str>,
    pub usage_note: Option<&'a str>,
}

pub fn build(args: TermArgs<'_>) -> anyhow::Result<NewTerm> {
    let term_type = args
        .term_type
        .map(|value| parse_enum::<TermType>(value, "type"))
        .transpose()?
        .unwrap_or_default();

    let mut input = NewTerm::new(args.source_lang, args.target_lang, args.source, args.target)
        .term_type(term_type);
    if let Some(domain) = args.domain {
        input = input.domain(domain);
    }
    if let Some(definition) = args.definition {
        input = input.definition(definition);
    }
    if let Some(usage_note) = args.usage_note {
        input = input.usage_note(usage_note);
    }
    input.validate()?;
    Ok(input)
}

pub async fn run(input: &NewTerm, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let term = ctx
        .checker
        .store()
        .add_term(input)
        .await
        .with_context(|| format!("failed to add term '{}'", input.source_term))?;
    output(&term, flags.format)
}
