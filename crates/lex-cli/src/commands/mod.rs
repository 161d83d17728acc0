pub mod check;
pub mod digest;
pub mod dispatch;
pub mod rule;
pub mod schema;
pub mod shared;
pub mod stats;
pub mod term;
