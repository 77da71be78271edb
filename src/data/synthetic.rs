//! Deterministic synthetic series generation for offline/demo runs.
//!
//! When the live FRED fetch fails, these series stand in so every consumer
//! still receives a plausible stream. Generation is total (unknown ids get a
//! generic flat shape) and bit-for-bit reproducible: the noise stream is
//! seeded from a fixed, documented hash of the series id and the start
//! month, so demo runs survive process restarts unchanged.
//!
//! Monthly series deliberately emit one row per calendar day (weekends
//! skipped): the monthly alignment engine then sees a non-trivial mid-month
//! vs end-of-month spread instead of a single observation per bucket.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::data::catalog::{self, Frequency};
use crate::domain::{Observation, Series, round4};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit seed for one generation run.
///
/// FNV-1a over the series id bytes, then the little-endian start year (i32)
/// and the start month (one byte). FNV-1a is fixed by constants above, so
/// the seed never depends on the toolchain's default string hash.
pub fn series_seed(series_id: &str, year: i32, month: u32) -> u64 {
    let mut h = FNV_OFFSET_BASIS;
    for &b in series_id.as_bytes() {
        h = (h ^ u64::from(b)).wrapping_mul(FNV_PRIME);
    }
    for b in year.to_le_bytes() {
        h = (h ^ u64::from(b)).wrapping_mul(FNV_PRIME);
    }
    h = (h ^ u64::from(month as u8)).wrapping_mul(FNV_PRIME);
    h
}

/// Generate a synthetic series over `[start, end]` (inclusive).
///
/// Total: never fails. `start > end` yields an empty series; no emitted date
/// falls outside the requested range.
pub fn generate(series_id: &str, start: NaiveDate, end: NaiveDate) -> Series {
    let def = catalog::definition_or_generic(series_id);
    let mut observations = Vec::new();

    // Sigma 0 is valid (constant zero noise, used by the recession step).
    let noise = Normal::new(0.0, def.noise_stddev).ok();
    let mut rng = StdRng::seed_from_u64(series_seed(series_id, start.year(), start.month()));

    let mut cursor = start;
    while cursor <= end {
        // Day-by-day series skip weekends; skipped days consume no noise draws.
        if def.step_months == 1 && is_weekend(cursor) {
            cursor = cursor + Duration::days(1);
            continue;
        }

        let base = match def.trend {
            Some(trend) => trend(cursor),
            None => def.start_value,
        };
        let eps = noise.map(|n| n.sample(&mut rng)).unwrap_or(0.0);
        let mut value = base + eps;
        if let Some(floor) = def.floor {
            value = value.max(floor);
        }
        observations.push(Observation {
            date: cursor,
            value: Some(round4(value)),
        });

        cursor = match def.frequency {
            Frequency::Quarterly => next_quarter_start(cursor),
            _ => cursor + Duration::days(1),
        };
    }

    Series {
        id: series_id.to_string(),
        observations,
    }
}

fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the calendar quarter after the one containing `d`.
fn next_quarter_start(d: NaiveDate) -> NaiveDate {
    let next_month = (d.month0() / 3 + 1) * 3 + 1;
    let (year, month) = if next_month > 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), next_month)
    };
    // Month is always one of 1/4/7/10; the fallback is unreachable.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_else(|| d + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn seed_is_stable_and_input_sensitive() {
        let a = series_seed("CPIAUCSL", 2018, 1);
        assert_eq!(a, series_seed("CPIAUCSL", 2018, 1));
        assert_ne!(a, series_seed("CPIAUCSL", 2018, 2));
        assert_ne!(a, series_seed("CPIAUCSL", 2019, 1));
        assert_ne!(a, series_seed("UNRATE", 2018, 1));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate("CPIAUCSL", d(2022, 1, 1), d(2022, 6, 30));
        let second = generate("CPIAUCSL", d(2022, 1, 1), d(2022, 6, 30));
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn inverted_range_yields_empty_series() {
        let series = generate("UNRATE", d(2023, 5, 1), d(2023, 4, 1));
        assert!(series.is_empty());
    }

    #[test]
    fn dates_stay_inside_requested_range() {
        let start = d(2021, 3, 10);
        let end = d(2021, 4, 20);
        for series_id in ["FEDFUNDS", "GDPC1", "T10Y2Y", "MADEUP"] {
            let series = generate(series_id, start, end);
            for obs in &series.observations {
                assert!(obs.date >= start && obs.date <= end, "{series_id}: {}", obs.date);
            }
        }
    }

    #[test]
    fn day_by_day_series_skip_weekends() {
        let series = generate("T10Y2Y", d(2023, 1, 2), d(2023, 1, 31));
        assert!(!series.is_empty());
        for obs in &series.observations {
            assert!(!is_weekend(obs.date), "weekend date emitted: {}", obs.date);
        }
        // 2023-01: 22 weekdays.
        assert_eq!(series.len(), 22);
    }

    #[test]
    fn quarterly_series_jump_to_quarter_starts() {
        let series = generate("GDPC1", d(2020, 2, 15), d(2020, 12, 31));
        let dates: Vec<_> = series.observations.iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            vec![d(2020, 2, 15), d(2020, 4, 1), d(2020, 7, 1), d(2020, 10, 1)]
        );
    }

    #[test]
    fn quarterly_jump_rolls_over_year_end() {
        assert_eq!(next_quarter_start(d(2021, 11, 3)), d(2022, 1, 1));
        assert_eq!(next_quarter_start(d(2021, 1, 1)), d(2021, 4, 1));
        assert_eq!(next_quarter_start(d(2021, 3, 31)), d(2021, 4, 1));
    }

    #[test]
    fn values_round_to_four_decimals() {
        let series = generate("UNRATE", d(2022, 1, 1), d(2022, 2, 28));
        for obs in &series.observations {
            let v = obs.value.unwrap();
            let scaled = v * 10_000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "value not 4dp-rounded: {v}"
            );
        }
    }

    #[test]
    fn unknown_id_falls_back_to_flat_level() {
        let series = generate("NOT_A_SERIES", d(2022, 1, 3), d(2022, 1, 14));
        for obs in &series.observations {
            let v = obs.value.unwrap();
            // Flat 100 baseline with unit-variance noise.
            assert!((v - 100.0).abs() < 10.0, "unexpected fallback value {v}");
        }
    }

    #[test]
    fn recession_indicator_covers_the_gfc_window() {
        let series = generate("USREC", d(2007, 11, 1), d(2009, 7, 1));
        assert!(!series.is_empty());
        let window_start = d(2007, 12, 1);
        let window_end = d(2009, 6, 1);
        for obs in &series.observations {
            let expected = if obs.date >= window_start && obs.date <= window_end {
                1.0
            } else {
                0.0
            };
            assert_eq!(
                obs.value,
                Some(expected),
                "wrong indicator on {}",
                obs.date
            );
        }
        // The window boundaries are actually exercised on both sides.
        assert!(series.observations.iter().any(|o| o.date < window_start));
        assert!(series.observations.iter().any(|o| o.date > window_end));
    }
}
