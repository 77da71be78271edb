//! Export mispricing scores to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::MispricingScore;
use crate::error::AppError;

/// Write per-month mispricing scores to a CSV file.
pub fn write_scores_csv(
    path: &Path,
    series_id: &str,
    scores: &[MispricingScore],
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "series_id,month,eom_date,mid_value,eom_value,score")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for s in scores {
        writeln!(
            file,
            "{},{},{},{:.4},{:.4},{:.4}",
            series_id, s.month, s.eom_date, s.mid_value, s.eom_value, s.score,
        )
        .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonthBucket;
    use chrono::NaiveDate;

    #[test]
    fn scores_csv_round_trips_through_the_filesystem() {
        let scores = vec![MispricingScore {
            month: MonthBucket { year: 2024, month: 1 },
            eom_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            mid_value: 100.0,
            eom_value: 110.0,
            score: 10.0,
        }];
        let path = std::env::temp_dir().join("msig_scores_csv_test.csv");
        write_scores_csv(&path, "CPIAUCSL", &scores).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("series_id,month,eom_date"));
        assert!(text.contains("CPIAUCSL,2024-01,2024-01-31,100.0000,110.0000,10.0000"));
        let _ = std::fs::remove_file(&path);
    }
}
