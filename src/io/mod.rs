//! Output helpers.
//!
//! - score CSV export (`export`)
//! - series and mispricing JSON export (`json`)

pub mod export;
pub mod json;

pub use export::*;
pub use json::*;
