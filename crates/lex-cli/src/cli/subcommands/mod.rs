mod rule;
mod term;

pub use rule::RuleCommands;
pub use term::TermCommands;
