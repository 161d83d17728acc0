//! # lex-check
//!
//! Terminology checking engine for Lexicon.
//!
//! Given a piece of UI text and its language, [`Checker`] gathers issues from
//! four sources, in this order:
//! 1. the term store (literal term matches, `lex-db`)
//! 2. the rule store (regex style rules, `lex-db`)
//! 3. the placeholder validator
//! 4. an optional external [`Analyzer`]
//!
//! and merges them with [`aggregate`]: duplicates on
//! `(start, end, original, kind)` collapse to the first seen, and the result
//! is stably ordered by start offset.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = lex_config::LexConfig::load()?;
//! let checker = lex_check::Checker::open(&config).await?;
//! for issue in checker.check("Please login to continue", "en", None).await {
//!     println!("{} -> {}", issue.original, issue.suggestion);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod analysis;
pub mod digest;
pub mod engine;
mod error;
pub mod placeholder;

pub use aggregate::aggregate;
pub use analysis::{AnalysisRequest, Analyzer, HttpAnalyzer, NoopAnalyzer, parse_candidates};
pub use engine::Checker;
pub use error::{AnalysisError, CheckError};
