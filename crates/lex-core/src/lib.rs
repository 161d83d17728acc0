//! # lex-core
//!
//! Core types shared by every Lexicon crate.
//!
//! - Entity structs for stored records (`Term`, `Rule`) and for the transient
//!   per-check `Issue`
//! - Enums for term types, rule types, severities, and issue sources
//! - Character-offset helpers (issue offsets count characters, not bytes)
//! - Response types for checks and store statistics

pub mod entities;
pub mod enums;
pub mod offsets;
pub mod responses;
