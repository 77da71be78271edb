//! Monthly alignment: mid-month vs end-of-month pairing and mispricing scores.

pub mod engine;

pub use engine::*;
