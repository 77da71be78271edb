//! Data acquisition: live FRED fetch, synthetic fallback, and the catalog
//! that parameterizes both.
//!
//! - `catalog`: static per-series metadata + generator parameters
//! - `fred`: blocking FRED observations client
//! - `synthetic`: deterministic offline series generation
//! - `source`: fetch-with-fallback wrapper with provenance tagging

pub mod catalog;
pub mod fred;
pub mod source;
pub mod synthetic;

pub use fred::FredClient;
pub use source::{SeriesSource, SourcedSeries};
