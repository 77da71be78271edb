//! The monthly alignment engine.
//!
//! For each calendar month represented in a series this selects:
//!
//! - the **mid-month** observation: closest to the 15th, ties broken by the
//!   earlier date
//! - the **end-of-month** observation: the chronologically last
//!
//! and scores the month as the percentage move from mid to end-of-month.
//! Both selections are drawn from the same per-month group, so a pair exists
//! exactly when the month has at least one dated value (inner join by
//! construction).

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::{MispricingScore, MonthBucket, MonthlyPair, Series, round4};

/// Align a series into monthly pairs and mispricing scores.
///
/// An empty series (or one containing only absent values) yields two empty
/// vectors; that is a valid terminal result, not an error. Months whose
/// mid-month value is zero appear in the pairs but carry no score.
/// Both outputs ascend by end-of-month date.
pub fn align(series: &Series) -> (Vec<MonthlyPair>, Vec<MispricingScore>) {
    // Keep dated values only, bucketed by calendar month. BTreeMap iteration
    // order gives ascending months, hence ascending end-of-month dates.
    let mut buckets: BTreeMap<MonthBucket, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for obs in &series.observations {
        if let Some(value) = obs.value {
            buckets
                .entry(MonthBucket::from_date(obs.date))
                .or_default()
                .push((obs.date, value));
        }
    }

    let mut pairs = Vec::with_capacity(buckets.len());
    let mut scores = Vec::with_capacity(buckets.len());

    for (month, group) in buckets {
        let Some((mid_date, mid_value)) = select_mid_month(&group) else {
            continue;
        };
        let Some((eom_date, eom_value)) = select_end_of_month(&group) else {
            continue;
        };

        pairs.push(MonthlyPair {
            month,
            mid_date,
            mid_value,
            eom_date,
            eom_value,
        });

        if mid_value != 0.0 {
            scores.push(MispricingScore {
                month,
                eom_date,
                mid_value,
                eom_value,
                score: round4((eom_value - mid_value) / mid_value * 100.0),
            });
        }
    }

    (pairs, scores)
}

/// Observation closest to the 15th; equal distances resolve to the earlier
/// date. Stable sort on (distance, date) then take the head, so the result
/// is insensitive to the input ordering of the group.
fn select_mid_month(group: &[(NaiveDate, f64)]) -> Option<(NaiveDate, f64)> {
    let mut ranked = group.to_vec();
    ranked.sort_by_key(|&(date, _)| (date.day().abs_diff(15), date));
    ranked.first().copied()
}

/// Chronologically last observation of the month.
fn select_end_of_month(group: &[(NaiveDate, f64)]) -> Option<(NaiveDate, f64)> {
    group.iter().max_by_key(|&&(date, _)| date).copied()
}
