use lex_core::entities::{Issue, Rule, Term};
use lex_core::responses::{CheckReport, StoreStatistics};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `lex schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(args.type_name), flags.format)
}

fn schema_of(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::Issue => schema_for!(Issue),
        SchemaType::Term => schema_for!(Term),
        SchemaType::Rule => schema_for!(Rule),
        SchemaType::CheckReport => schema_for!(CheckReport),
        SchemaType::Statistics => schema_for!(StoreStatistics),
    }
}
