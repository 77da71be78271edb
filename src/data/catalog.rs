//! Series catalog: display metadata and generator parameters per FRED id.
//!
//! Each recognized identifier carries a hand-authored baseline shape as a
//! pure function of the observation date. Keeping the regime-breakpoint
//! logic in standalone functions (instead of one large conditional in the
//! generator loop) makes each shape independently testable.

use chrono::NaiveDate;
use std::f64::consts::PI;

/// Pure baseline level for a given observation date.
pub type TrendFn = fn(NaiveDate) -> f64;

/// Native cadence of the real series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Monthly,
    Quarterly,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
        }
    }
}

/// Static generator configuration + display metadata for one series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub units: &'static str,
    pub frequency: Frequency,
    /// Level the generic fallback shape flattens at.
    pub start_value: f64,
    /// Generator stepping cadence in months: 1 = day-by-day loop with
    /// weekend skipping, 3 = one observation per calendar quarter.
    pub step_months: u32,
    /// Typical per-step movement of the real series. Informational (shown in
    /// the catalog listing); the baselines below encode the actual shapes.
    pub drift_per_step: f64,
    /// Standard deviation of the Gaussian noise superimposed on the baseline.
    pub noise_stddev: f64,
    /// Baseline shape; `None` falls back to a flat `start_value` level.
    pub trend: Option<TrendFn>,
    /// Lower clamp applied after noise (rates cannot go negative).
    pub floor: Option<f64>,
}

/// Recognized series, matching the dashboard's selector.
pub const CATALOG: &[SeriesDefinition] = &[
    SeriesDefinition {
        id: "GDPC1",
        label: "Real GDP",
        units: "Billions $",
        frequency: Frequency::Quarterly,
        start_value: 18000.0,
        step_months: 3,
        drift_per_step: 120.0,
        noise_stddev: 60.0,
        trend: Some(real_gdp_baseline),
        floor: None,
    },
    SeriesDefinition {
        id: "UNRATE",
        label: "Unemployment Rate",
        units: "%",
        frequency: Frequency::Monthly,
        start_value: 6.5,
        step_months: 1,
        drift_per_step: -0.05,
        noise_stddev: 0.12,
        trend: Some(unemployment_baseline),
        floor: Some(0.0),
    },
    SeriesDefinition {
        id: "CPIAUCSL",
        label: "CPI Inflation",
        units: "Index",
        frequency: Frequency::Monthly,
        start_value: 240.0,
        step_months: 1,
        drift_per_step: 0.5,
        noise_stddev: 0.5,
        trend: Some(cpi_baseline),
        floor: None,
    },
    SeriesDefinition {
        id: "FEDFUNDS",
        label: "Federal Funds Rate",
        units: "%",
        frequency: Frequency::Monthly,
        start_value: 1.5,
        step_months: 1,
        drift_per_step: 0.05,
        noise_stddev: 0.06,
        trend: Some(fed_funds_baseline),
        floor: Some(0.0),
    },
    SeriesDefinition {
        id: "USREC",
        label: "Recession Indicator",
        units: "0/1",
        frequency: Frequency::Monthly,
        start_value: 0.0,
        step_months: 1,
        drift_per_step: 0.0,
        noise_stddev: 0.0,
        trend: Some(recession_indicator),
        floor: None,
    },
    SeriesDefinition {
        id: "T10Y2Y",
        label: "Yield Curve (10Y-2Y)",
        units: "%",
        frequency: Frequency::Daily,
        start_value: 1.2,
        step_months: 1,
        drift_per_step: -0.01,
        noise_stddev: 0.12,
        trend: Some(yield_curve_baseline),
        floor: None,
    },
    SeriesDefinition {
        id: "DEXUSEU",
        label: "USD/EUR Exchange Rate",
        units: "$/€",
        frequency: Frequency::Daily,
        start_value: 1.12,
        step_months: 1,
        drift_per_step: 0.001,
        noise_stddev: 0.006,
        trend: Some(usd_eur_baseline),
        floor: None,
    },
];

/// Fallback parameterization for identifiers not in the catalog.
pub const GENERIC: SeriesDefinition = SeriesDefinition {
    id: "",
    label: "Unrecognized series",
    units: "",
    frequency: Frequency::Monthly,
    start_value: 100.0,
    step_months: 1,
    drift_per_step: 0.0,
    noise_stddev: 1.0,
    trend: None,
    floor: None,
};

/// Series shown on the dashboard cards.
pub const DASHBOARD_SERIES: &[&str] = &["GDPC1", "UNRATE", "CPIAUCSL", "FEDFUNDS", "USREC"];

pub fn lookup(series_id: &str) -> Option<&'static SeriesDefinition> {
    CATALOG.iter().find(|def| def.id == series_id)
}

pub fn definition_or_generic(series_id: &str) -> &'static SeriesDefinition {
    lookup(series_id).unwrap_or(&GENERIC)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All call sites pass literal, valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid breakpoint date")
}

fn years_since(d: NaiveDate, epoch: NaiveDate) -> f64 {
    (d - epoch).num_days() as f64 / 365.0
}

/// Funds-rate path: six regimes bounded by the major policy turning points
/// (pre-2006 plateau, 2007-08 cuts, zero-bound era, 2016-19 hikes, COVID
/// cuts, zero-bound again, 2022 hiking cycle).
pub fn fed_funds_baseline(d: NaiveDate) -> f64 {
    if d < date(2006, 7, 1) {
        4.5
    } else if d < date(2008, 12, 1) {
        (4.5 - years_since(d, date(2006, 7, 1)) * 2.0).max(0.05)
    } else if d < date(2015, 12, 1) {
        0.07
    } else if d < date(2019, 7, 1) {
        (0.25 + years_since(d, date(2015, 12, 1)) * 0.7).min(2.5)
    } else if d < date(2020, 4, 1) {
        (2.5 - years_since(d, date(2019, 7, 1))).max(0.07)
    } else if d < date(2022, 3, 1) {
        0.08
    } else {
        (0.08 + years_since(d, date(2022, 3, 1)) * 2.5).min(5.5)
    }
}

/// Unemployment path: flat pre-GFC, GFC climb, long recovery, COVID spike,
/// post-COVID decline.
pub fn unemployment_baseline(d: NaiveDate) -> f64 {
    if d < date(2008, 1, 1) {
        4.8
    } else if d < date(2010, 10, 1) {
        4.8 + years_since(d, date(2008, 1, 1)) * 3.0
    } else if d < date(2020, 1, 1) {
        (10.0 - years_since(d, date(2010, 10, 1)) * 0.75).max(3.5)
    } else if d < date(2020, 5, 1) {
        3.5 + (d - date(2020, 1, 1)).num_days() as f64 / 30.0 * 3.0
    } else {
        (14.8 - years_since(d, date(2020, 5, 1)) * 2.8).max(3.4)
    }
}

/// Real GDP: linear growth with sinusoidal dips for the GFC and COVID.
pub fn real_gdp_baseline(d: NaiveDate) -> f64 {
    let mut base = 13000.0 + years_since(d, date(2000, 1, 1)) * 750.0;
    if d >= date(2008, 9, 1) && d <= date(2009, 6, 1) {
        base -= 600.0 * ((d - date(2008, 9, 1)).num_days() as f64 / 270.0 * PI).sin();
    }
    if d >= date(2020, 1, 1) && d <= date(2020, 6, 1) {
        base -= 2000.0 * ((d - date(2020, 1, 1)).num_days() as f64 / 150.0 * PI).sin();
    }
    base
}

/// CPI: steady climb, 2021-22 inflation surge, gradual post-peak decay.
pub fn cpi_baseline(d: NaiveDate) -> f64 {
    let mut base = 200.0 + years_since(d, date(2000, 1, 1)) * 3.5;
    if d >= date(2021, 3, 1) && d < date(2022, 12, 1) {
        base += years_since(d, date(2021, 3, 1)) * 18.0;
    } else if d >= date(2022, 12, 1) {
        let extra = 18.0 - years_since(d, date(2022, 12, 1)) * 6.0;
        base += extra.max(0.0);
    }
    base
}

/// 10y-2y spread: slow sinusoidal cycle, inverted from mid-2022.
pub fn yield_curve_baseline(d: NaiveDate) -> f64 {
    let mut v = 1.5 + (years_since(d, date(2000, 1, 1)) / 3.0).sin();
    if d >= date(2022, 7, 1) {
        v -= 2.5;
    }
    v
}

/// USD/EUR: slow oscillation around 1.10.
pub fn usd_eur_baseline(d: NaiveDate) -> f64 {
    1.10 + 0.08 * (years_since(d, date(2000, 1, 1)) / 2.5).sin()
}

/// NBER recession step function: 1 inside the 2001, 2007-09 and 2020
/// recessions (endpoints inclusive), 0 otherwise.
pub fn recession_indicator(d: NaiveDate) -> f64 {
    let ranges = [
        (date(2001, 3, 1), date(2001, 11, 1)),
        (date(2007, 12, 1), date(2009, 6, 1)),
        (date(2020, 2, 1), date(2020, 4, 1)),
    ];
    if ranges.iter().any(|&(start, end)| start <= d && d <= end) {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_recognizes_catalog_ids_only() {
        assert!(lookup("CPIAUCSL").is_some());
        assert!(lookup("NOPE").is_none());
        assert_eq!(definition_or_generic("NOPE").start_value, 100.0);
    }

    #[test]
    fn fed_funds_regimes_match_breakpoints() {
        // Pre-2006 plateau.
        assert_eq!(fed_funds_baseline(date(2005, 1, 1)), 4.5);
        // Zero-bound era after the GFC cuts.
        assert_eq!(fed_funds_baseline(date(2012, 6, 1)), 0.07);
        // 2022 hiking cycle caps at 5.5.
        assert_eq!(fed_funds_baseline(date(2026, 1, 1)), 5.5);
        // First day of the hiking cycle starts at the zero-bound level.
        let start = fed_funds_baseline(date(2022, 3, 1));
        assert!((start - 0.08).abs() < 1e-9, "got {start}");
    }

    #[test]
    fn unemployment_covid_spike_shape() {
        let before = unemployment_baseline(date(2019, 12, 1));
        let peak = unemployment_baseline(date(2020, 4, 30));
        let after = unemployment_baseline(date(2022, 1, 1));
        assert!(before < 4.5, "pre-COVID level, got {before}");
        assert!(peak > 10.0, "COVID spike, got {peak}");
        assert!(after < peak, "post-COVID decline, got {after}");
    }

    #[test]
    fn gdp_dips_during_recessions() {
        // Same elapsed-trend level, but inside vs outside the GFC dip window.
        let trough = real_gdp_baseline(date(2009, 1, 15));
        let trend_only = 13000.0 + years_since(date(2009, 1, 15), date(2000, 1, 1)) * 750.0;
        assert!(trough < trend_only, "GFC dip should subtract from trend");
    }

    #[test]
    fn yield_curve_inverts_in_2022() {
        assert!(yield_curve_baseline(date(2023, 1, 1)) < 0.0);
        assert!(yield_curve_baseline(date(2021, 1, 1)) > 0.0);
    }

    #[test]
    fn recession_indicator_is_a_step_function() {
        assert_eq!(recession_indicator(date(2008, 6, 1)), 1.0);
        assert_eq!(recession_indicator(date(2007, 12, 1)), 1.0);
        assert_eq!(recession_indicator(date(2009, 6, 1)), 1.0);
        assert_eq!(recession_indicator(date(2009, 6, 2)), 0.0);
        assert_eq!(recession_indicator(date(2007, 11, 30)), 0.0);
        assert_eq!(recession_indicator(date(2015, 1, 1)), 0.0);
        assert_eq!(recession_indicator(date(2020, 3, 15)), 1.0);
    }
}
