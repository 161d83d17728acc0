use clap::Subcommand;

/// Term pair commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TermCommands {
    /// Add a term pair.
    Add {
        #[arg(long)]
        source_lang: String,
        #[arg(long)]
        target_lang: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        target: String,
        /// preferred, admitted, or deprecated
        #[arg(long = "type")]
        term_type: Option<String>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        definition: Option<String>,
        #[arg(long)]
        usage_note: Option<String>,
    },
    /// List terms by source language (capped by `--limit`).
    List {
        #[arg(long)]
        lang: String,
    },
    /// Search source and target terms.
    Search {
        query: String,
        #[arg(long)]
        lang: Option<String>,
    },
}
