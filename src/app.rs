//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the series source (live client or synthetic-only)
//! - runs the alignment/scoring pipeline
//! - prints reports
//! - writes optional exports

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;

use crate::cli::{Command, DashboardArgs, MispricingArgs, SeriesArgs, SnapshotArgs};
use crate::data::catalog;
use crate::data::source::SeriesSource;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `msig` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `msig` (and `msig --offline`) to behave like
    // `msig dashboard ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::List => handle_list(),
        Command::Series(args) => handle_series(args),
        Command::Snapshot(args) => handle_snapshot(args),
        Command::Mispricing(args) => handle_mispricing(args),
        Command::Dashboard(args) => handle_dashboard(args),
    }
}

fn handle_list() -> Result<(), AppError> {
    println!("{}", crate::report::format_catalog());
    Ok(())
}

fn handle_series(args: SeriesArgs) -> Result<(), AppError> {
    let series_id = args.series_id.to_ascii_uppercase();
    let end = args.end.unwrap_or_else(today);
    // Historical view works out of the box: default to a five-year window.
    let start = args.start.unwrap_or(end - Duration::days(5 * 365));

    let source = build_source(args.offline);
    let sourced = source.load(&series_id, start, end);
    let def = catalog::definition_or_generic(&series_id);

    println!("{}", crate::report::format_series_summary(&sourced, def, args.tail));

    if let Some(path) = &args.export_json {
        crate::io::json::write_series_json(path, &sourced, def)?;
    }
    Ok(())
}

fn handle_snapshot(args: SnapshotArgs) -> Result<(), AppError> {
    let (series_id, run) = analyze(&args.series_id, args.start, args.end, args.offline);
    println!("{}", crate::report::format_snapshot(&series_id, &run));
    Ok(())
}

fn handle_mispricing(args: MispricingArgs) -> Result<(), AppError> {
    let (series_id, run) = analyze(&args.series_id, args.start, args.end, args.offline);
    println!("{}", crate::report::format_mispricing(&series_id, &run));
    export_scores(&args, &series_id, &run)
}

fn handle_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let source = build_source(args.offline);
    let cards = pipeline::run_dashboard(&source, args.start, today());
    println!("{}", crate::report::format_dashboard(&cards));
    Ok(())
}

fn analyze(
    series_id: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    offline: bool,
) -> (String, pipeline::AnalysisOutput) {
    let series_id = series_id.to_ascii_uppercase();
    let end = end.unwrap_or_else(today);
    let source = build_source(offline);
    let run = pipeline::run_analysis(&source, &series_id, start, end);
    (series_id, run)
}

fn export_scores(
    args: &MispricingArgs,
    series_id: &str,
    run: &pipeline::AnalysisOutput,
) -> Result<(), AppError> {
    if let Some(path) = &args.export {
        crate::io::export::write_scores_csv(path, series_id, &run.scores)?;
    }
    if let Some(path) = &args.export_json {
        crate::io::json::write_mispricing_json(path, series_id, run.sourced.is_synthetic, &run.scores)?;
    }
    Ok(())
}

fn build_source(offline: bool) -> SeriesSource {
    if offline {
        SeriesSource::offline()
    } else {
        SeriesSource::from_env()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Rewrite argv so `msig` defaults to `msig dashboard`.
///
/// Rules:
/// - `msig`                      -> `msig dashboard`
/// - `msig --offline ...`        -> `msig dashboard --offline ...`
/// - `msig --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("dashboard".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "list" | "series" | "snapshot" | "mispricing" | "dashboard"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "dashboard flags".
    if arg1.starts_with('-') {
        argv.insert(1, "dashboard".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
