use clap::Subcommand;

/// Style rule commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RuleCommands {
    /// Add a regex style rule.
    Add {
        #[arg(long)]
        lang: String,
        /// Regular expression, matched case-insensitively
        #[arg(long)]
        pattern: String,
        #[arg(long)]
        replacement: String,
        /// preferred_synonym, forbidden_term, consistency, clarity, or any custom name
        #[arg(long = "type")]
        rule_type: Option<String>,
        /// error, warning, or info
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List rules for a language.
    List {
        #[arg(long)]
        lang: String,
    },
}
