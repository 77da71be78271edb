//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw observation streams (`Observation`, `Series`)
//! - monthly alignment outputs (`MonthBucket`, `MonthlyPair`, `MispricingScore`)
//! - dashboard summaries and export file schemas

pub mod types;

pub use types::*;
