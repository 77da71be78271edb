//! Shared analytics pipeline used by the CLI subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load (live or synthetic) -> monthly alignment -> scores / summaries
//!
//! The subcommand handlers then focus on presentation (printing vs exports).

use chrono::NaiveDate;

use crate::align;
use crate::data::catalog;
use crate::data::source::{SeriesSource, SourcedSeries};
use crate::domain::{MispricingScore, MonthlyPair, SeriesSummary, round2, round4};

/// All computed outputs of one series analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub sourced: SourcedSeries,
    pub pairs: Vec<MonthlyPair>,
    pub scores: Vec<MispricingScore>,
}

/// Load one series and run the monthly alignment over it.
pub fn run_analysis(
    source: &SeriesSource,
    series_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> AnalysisOutput {
    let sourced = source.load(series_id, start, end);
    let (pairs, scores) = align::align(&sourced.series);
    AnalysisOutput {
        sourced,
        pairs,
        scores,
    }
}

/// Build the dashboard cards: latest reading and change vs the previous
/// observation for each default series.
pub fn run_dashboard(source: &SeriesSource, start: NaiveDate, end: NaiveDate) -> Vec<SeriesSummary> {
    let mut out = Vec::with_capacity(catalog::DASHBOARD_SERIES.len());
    for &series_id in catalog::DASHBOARD_SERIES {
        let sourced = source.load(series_id, start, end);
        let def = catalog::definition_or_generic(series_id);
        let obs = &sourced.series.observations;
        let Some(last) = obs.last() else { continue };
        let prev = if obs.len() > 1 { &obs[obs.len() - 2] } else { last };

        let (change, pct_change) = change_from_previous(last.value, prev.value);

        out.push(SeriesSummary {
            series_id: series_id.to_string(),
            label: def.label.to_string(),
            latest_date: last.date,
            latest_value: last.value.map(round4),
            change,
            pct_change,
            synthetic: sourced.is_synthetic,
        });
    }
    out
}

/// Absolute change (4dp) and percent change (2dp) of the latest reading vs
/// the previous one. Both are undefined when either reading is absent or the
/// previous reading is zero.
fn change_from_previous(
    latest: Option<f64>,
    previous: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    match (latest, previous) {
        (Some(latest), Some(previous)) if previous != 0.0 => {
            let change = latest - previous;
            (Some(round4(change)), Some(round2(change / previous * 100.0)))
        }
        _ => (None, None),
    }
}
