//! Terminal report builders: catalog listing, series summaries, snapshot and
//! mispricing tables, dashboard cards.

use crate::app::pipeline::AnalysisOutput;
use crate::data::catalog::{self, SeriesDefinition};
use crate::data::source::SourcedSeries;
use crate::domain::SeriesSummary;

fn provenance(synthetic: bool) -> &'static str {
    if synthetic {
        "synthetic (live source unavailable or skipped)"
    } else {
        "live FRED"
    }
}

/// Format the series catalog.
pub fn format_catalog() -> String {
    let mut out = String::new();
    out.push_str("=== msig - Series Catalog ===\n");
    out.push_str(&format!(
        "{:<10} {:<24} {:<12} {:<10} {:>10} {:>8}\n",
        "ID", "LABEL", "UNITS", "FREQ", "DRIFT/STEP", "NOISE"
    ));
    for def in catalog::CATALOG {
        out.push_str(&format!(
            "{:<10} {:<24} {:<12} {:<10} {:>10.3} {:>8.3}\n",
            def.id,
            def.label,
            def.units,
            def.frequency.label(),
            def.drift_per_step,
            def.noise_stddev,
        ));
    }
    out
}

/// Format a summary of one loaded series plus its trailing observations.
pub fn format_series_summary(
    sourced: &SourcedSeries,
    def: &SeriesDefinition,
    tail: usize,
) -> String {
    let series = &sourced.series;
    let mut out = String::new();

    out.push_str(&format!("=== msig - {} ({}) ===\n", series.id, def.label));
    out.push_str(&format!("Data: {}\n", provenance(sourced.is_synthetic)));
    out.push_str(&format!("Observations: {}\n", series.len()));
    if let (Some(first), Some(last)) = (series.observations.first(), series.observations.last()) {
        out.push_str(&format!("Range: {} .. {}\n", first.date, last.date));
    }

    if !series.is_empty() && tail > 0 {
        out.push_str(&format!("\nLast {} observations:\n", tail.min(series.len())));
        let skip = series.len().saturating_sub(tail);
        for obs in series.observations.iter().skip(skip) {
            match obs.value {
                Some(v) => out.push_str(&format!("  {}  {:>12.4} {}\n", obs.date, v, def.units)),
                None => out.push_str(&format!("  {}  {:>12}\n", obs.date, ".")),
            }
        }
    }

    out
}

/// Format the mid-month vs end-of-month pairs per month.
pub fn format_snapshot(series_id: &str, run: &AnalysisOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== msig - Monthly Snapshot ({series_id}) ===\n"));
    out.push_str(&format!("Data: {}\n", provenance(run.sourced.is_synthetic)));
    out.push_str(&format!("Months: {}\n\n", run.pairs.len()));

    out.push_str(&format!(
        "{:<8} {:<12} {:>12} {:<12} {:>12}\n",
        "MONTH", "MID DATE", "MID", "EOM DATE", "EOM"
    ));
    for pair in &run.pairs {
        out.push_str(&format!(
            "{:<8} {:<12} {:>12.4} {:<12} {:>12.4}\n",
            pair.month.to_string(),
            pair.mid_date.to_string(),
            pair.mid_value,
            pair.eom_date.to_string(),
            pair.eom_value,
        ));
    }

    out
}

/// Format the per-month mispricing scores.
///
/// Positive = the month closed above its mid-month signal (upside surprise).
pub fn format_mispricing(series_id: &str, run: &AnalysisOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== msig - Mispricing Scores ({series_id}) ===\n"));
    out.push_str(&format!("Data: {}\n", provenance(run.sourced.is_synthetic)));
    out.push_str(&format!(
        "Months: {} paired, {} scored\n\n",
        run.pairs.len(),
        run.scores.len()
    ));

    out.push_str(&format!(
        "{:<8} {:<12} {:>12} {:>12} {:>10}\n",
        "MONTH", "EOM DATE", "MID", "EOM", "SCORE %"
    ));
    for score in &run.scores {
        out.push_str(&format!(
            "{:<8} {:<12} {:>12.4} {:>12.4} {:>+10.4}\n",
            score.month.to_string(),
            score.eom_date.to_string(),
            score.mid_value,
            score.eom_value,
            score.score,
        ));
    }

    if !run.scores.is_empty() {
        let mean = run.scores.iter().map(|s| s.score).sum::<f64>() / run.scores.len() as f64;
        out.push_str(&format!("\nMean score: {mean:+.4}%\n"));
    }

    out
}

/// Format the dashboard cards.
pub fn format_dashboard(cards: &[SeriesSummary]) -> String {
    let mut out = String::new();

    out.push_str("=== msig - Macro Dashboard ===\n\n");
    out.push_str(&format!(
        "{:<10} {:<24} {:<12} {:>12} {:>10} {:>8}  {}\n",
        "ID", "LABEL", "LATEST", "VALUE", "CHANGE", "PCT", "SOURCE"
    ));
    for card in cards {
        out.push_str(&format!(
            "{:<10} {:<24} {:<12} {:>12} {:>10} {:>8}  {}\n",
            card.series_id,
            card.label,
            card.latest_date.to_string(),
            card.latest_value
                .map(|v| format!("{v:.4}"))
                .unwrap_or_else(|| ".".to_string()),
            card.change
                .map(|v| format!("{v:+.4}"))
                .unwrap_or_else(|| "-".to_string()),
            card.pct_change
                .map(|v| format!("{v:+.2}%"))
                .unwrap_or_else(|| "-".to_string()),
            if card.synthetic { "synthetic" } else { "live" },
        ));
    }

    out
}
