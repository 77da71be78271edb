//! Command-line parsing for the macro signals tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the data/analytics code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "msig",
    version,
    about = "Macro signals: FRED mid-month vs end-of-month analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the series catalog (ids, labels, units, cadence).
    List,
    /// Fetch (or generate) one series and print a summary.
    Series(SeriesArgs),
    /// Print mid-month and end-of-month observations per month.
    Snapshot(SnapshotArgs),
    /// Print per-month mispricing scores, optionally exporting CSV/JSON.
    Mispricing(MispricingArgs),
    /// Print summary cards for the default series set.
    ///
    /// This is also what a bare `msig` runs.
    Dashboard(DashboardArgs),
}

/// Options for `msig series`.
#[derive(Debug, Parser, Clone)]
pub struct SeriesArgs {
    /// FRED series identifier (e.g. CPIAUCSL, UNRATE, GDPC1).
    #[arg(short = 's', long = "series-id", default_value = "CPIAUCSL")]
    pub series_id: String,

    /// First observation date (YYYY-MM-DD). Defaults to five years ago.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last observation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Skip the live fetch and use the synthetic generator.
    #[arg(long)]
    pub offline: bool,

    /// Print only the trailing N observations.
    #[arg(long, default_value_t = 12)]
    pub tail: usize,

    /// Export the series to a JSON file.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for `msig snapshot`.
#[derive(Debug, Parser, Clone)]
pub struct SnapshotArgs {
    /// FRED series identifier (e.g. CPIAUCSL, UNRATE, GDPC1).
    #[arg(short = 's', long = "series-id", default_value = "CPIAUCSL")]
    pub series_id: String,

    /// First observation date (YYYY-MM-DD).
    #[arg(long, default_value = "2018-01-01")]
    pub start: NaiveDate,

    /// Last observation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Skip the live fetch and use the synthetic generator.
    #[arg(long)]
    pub offline: bool,
}

/// Options for `msig mispricing`.
#[derive(Debug, Parser, Clone)]
pub struct MispricingArgs {
    /// FRED series identifier (e.g. CPIAUCSL, UNRATE, GDPC1).
    #[arg(short = 's', long = "series-id", default_value = "CPIAUCSL")]
    pub series_id: String,

    /// First observation date (YYYY-MM-DD).
    #[arg(long, default_value = "2018-01-01")]
    pub start: NaiveDate,

    /// Last observation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Skip the live fetch and use the synthetic generator.
    #[arg(long)]
    pub offline: bool,

    /// Export mispricing scores to a CSV file.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export mispricing scores to a JSON file.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for `msig dashboard`.
#[derive(Debug, Parser, Clone)]
pub struct DashboardArgs {
    /// First observation date for the history behind each card.
    #[arg(long, default_value = "1980-01-01")]
    pub start: NaiveDate,

    /// Skip the live fetch and use the synthetic generator.
    #[arg(long)]
    pub offline: bool,
}
