//! Queries over the term and rule tables.
//!
//! Each module adds methods to `LexStore` via `impl LexStore` blocks.

pub mod rule;
pub mod stats;
pub mod term;
