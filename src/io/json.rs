//! Write series and mispricing JSON files.
//!
//! These are the "portable" representations consumed by charting front-ends:
//! parallel date/value arrays plus provenance. The schemas are defined by
//! `domain::SeriesFile` and `domain::MispricingFile`.

use std::fs::File;
use std::path::Path;

use crate::data::catalog::SeriesDefinition;
use crate::data::source::SourcedSeries;
use crate::domain::{MispricingFile, MispricingScore, SeriesFile};
use crate::error::AppError;

const TOOL: &str = "msig";

/// Write one loaded series to a JSON file.
pub fn write_series_json(
    path: &Path,
    sourced: &SourcedSeries,
    def: &SeriesDefinition,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create series JSON '{}': {e}", path.display()))
    })?;

    let series = &sourced.series;
    let payload = SeriesFile {
        tool: TOOL.to_string(),
        series_id: series.id.clone(),
        label: def.label.to_string(),
        units: def.units.to_string(),
        frequency: def.frequency.label().to_string(),
        synthetic: sourced.is_synthetic,
        dates: series.observations.iter().map(|o| o.date).collect(),
        values: series.observations.iter().map(|o| o.value).collect(),
    };

    serde_json::to_writer_pretty(file, &payload)
        .map_err(|e| AppError::usage(format!("Failed to write series JSON: {e}")))?;

    Ok(())
}

/// Write per-month mispricing scores to a JSON file.
pub fn write_mispricing_json(
    path: &Path,
    series_id: &str,
    synthetic: bool,
    scores: &[MispricingScore],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create mispricing JSON '{}': {e}",
            path.display()
        ))
    })?;

    let payload = MispricingFile {
        tool: TOOL.to_string(),
        series_id: series_id.to_string(),
        synthetic,
        months: scores.iter().map(|s| s.eom_date).collect(),
        mid_values: scores.iter().map(|s| s.mid_value).collect(),
        eom_values: scores.iter().map(|s| s.eom_value).collect(),
        scores: scores.iter().map(|s| s.score).collect(),
    };

    serde_json::to_writer_pretty(file, &payload)
        .map_err(|e| AppError::usage(format!("Failed to write mispricing JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::data::source::SeriesSource;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn series_json_parses_back_into_the_schema() {
        let source = SeriesSource::offline();
        let sourced = source.load("UNRATE", d(2023, 1, 1), d(2023, 1, 31));
        let def = catalog::definition_or_generic("UNRATE");

        let path = std::env::temp_dir().join("msig_series_json_test.json");
        write_series_json(&path, &sourced, def).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: SeriesFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.series_id, "UNRATE");
        assert!(parsed.synthetic);
        assert_eq!(parsed.dates.len(), parsed.values.len());
        assert_eq!(parsed.dates.len(), sourced.series.len());
        let _ = std::fs::remove_file(&path);
    }
}
