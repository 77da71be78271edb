//! `macro-signals` library crate.
//!
//! The binary (`msig`) is a thin wrapper around this library so that:
//!
//! - core logic (generation, alignment, scoring) is testable without
//!   spawning processes
//! - modules are reusable (e.g., a future web layer or notebooks)
//! - code stays easy to navigate as the project grows

pub mod align;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
