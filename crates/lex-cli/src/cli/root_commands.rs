use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{RuleCommands, TermCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check UI text for terminology, style, and placeholder issues.
    Check(CheckArgs),
    /// Term pairs.
    Term {
        #[command(subcommand)]
        action: TermCommands,
    },
    /// Style rules.
    Rule {
        #[command(subcommand)]
        action: RuleCommands,
    },
    /// Term database statistics.
    Stats,
    /// Print the terminology digest for a language.
    Digest(DigestArgs),
    /// Print the JSON Schema of a response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Text to check; reads stdin when omitted or `-`
    pub text: Option<String>,
    /// Language code of the text (e.g. en, jp)
    #[arg(long)]
    pub lang: String,
    /// Where the text appears (passed to external analysis)
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DigestArgs {
    #[arg(long)]
    pub lang: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Response type to describe
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Issue,
    Term,
    Rule,
    CheckReport,
    Statistics,
}
