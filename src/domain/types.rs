//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during alignment and scoring
//! - exported to JSON/CSV
//! - rebuilt per request with no shared state between calls

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One dated reading of a series.
///
/// `value` is `None` when the source reported a missing observation (FRED
/// encodes those as `"."`). Absent is distinct from zero: a zero reading is a
/// real data point, an absent one is dropped before monthly alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Date-ordered observation stream for one series identifier.
///
/// Invariant after `normalize`: dates are strictly increasing. Duplicate
/// input dates are tolerated and resolved last-write-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub observations: Vec<Observation>,
}

impl Series {
    /// Build a normalized series from raw observations.
    pub fn new(id: impl Into<String>, observations: Vec<Observation>) -> Self {
        let mut series = Self {
            id: id.into(),
            observations,
        };
        series.normalize();
        series
    }

    /// Stable sort by date, then collapse duplicate dates keeping the
    /// latest-written observation.
    pub fn normalize(&mut self) {
        self.observations.sort_by_key(|o| o.date);
        let mut out: Vec<Observation> = Vec::with_capacity(self.observations.len());
        for obs in self.observations.drain(..) {
            match out.last_mut() {
                Some(prev) if prev.date == obs.date => *prev = obs,
                _ => out.push(obs),
            }
        }
        self.observations = out;
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }
}

/// A single calendar month used as a grouping key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Mid-month and end-of-month observations paired within one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPair {
    pub month: MonthBucket,
    pub mid_date: NaiveDate,
    pub mid_value: f64,
    pub eom_date: NaiveDate,
    pub eom_value: f64,
}

/// Percentage surprise from the mid-month value to the end-of-month value.
///
/// Positive = the month closed higher than its mid-month signal (upside
/// surprise). Months with a zero mid-month value carry no score and are not
/// represented here at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MispricingScore {
    pub month: MonthBucket,
    pub eom_date: NaiveDate,
    pub mid_value: f64,
    pub eom_value: f64,
    pub score: f64,
}

/// One dashboard card: latest reading of a series plus its change from the
/// previous observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub series_id: String,
    pub label: String,
    pub latest_date: NaiveDate,
    pub latest_value: Option<f64>,
    pub change: Option<f64>,
    pub pct_change: Option<f64>,
    pub synthetic: bool,
}

/// Portable JSON schema for one exported series.
///
/// Matches the payload shape the dashboard front-end consumes: parallel
/// date/value arrays plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFile {
    pub tool: String,
    pub series_id: String,
    pub label: String,
    pub units: String,
    pub frequency: String,
    pub synthetic: bool,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Option<f64>>,
}

/// Portable JSON schema for exported mispricing scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MispricingFile {
    pub tool: String,
    pub series_id: String,
    pub synthetic: bool,
    pub months: Vec<NaiveDate>,
    pub mid_values: Vec<f64>,
    pub eom_values: Vec<f64>,
    pub scores: Vec<f64>,
}

/// Round to 4 decimal digits (the precision of all emitted values/scores).
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Round to 2 decimal digits (dashboard percent changes).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn normalize_sorts_by_date() {
        let series = Series::new(
            "X",
            vec![
                Observation { date: d(2024, 3, 2), value: Some(2.0) },
                Observation { date: d(2024, 1, 5), value: Some(1.0) },
                Observation { date: d(2024, 2, 9), value: None },
            ],
        );
        let dates: Vec<_> = series.observations.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![d(2024, 1, 5), d(2024, 2, 9), d(2024, 3, 2)]);
    }

    #[test]
    fn normalize_duplicate_dates_last_write_wins() {
        let series = Series::new(
            "X",
            vec![
                Observation { date: d(2024, 1, 5), value: Some(1.0) },
                Observation { date: d(2024, 1, 5), value: Some(9.0) },
            ],
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series.observations[0].value, Some(9.0));
    }

    #[test]
    fn month_bucket_display_and_order() {
        let jan = MonthBucket::from_date(d(2024, 1, 31));
        let feb = MonthBucket::from_date(d(2024, 2, 1));
        assert_eq!(jan.to_string(), "2024-01");
        assert!(jan < feb);
        assert!(MonthBucket { year: 2023, month: 12 } < jan);
    }

    #[test]
    fn round4_examples() {
        assert_eq!(round4(1.23456), 1.2346);
        assert_eq!(round4(-66.666666), -66.6667);
        assert_eq!(round4(2.0), 2.0);
    }

    #[test]
    fn round2_examples() {
        assert_eq!(round2(0.97736), 0.98);
        assert_eq!(round2(-12.504), -12.5);
        assert_eq!(round2(5.0), 5.0);
    }
}
