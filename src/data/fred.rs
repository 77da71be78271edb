//! FRED API integration: raw observations for a single series.

use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{Observation, Series};
use crate::error::AppError;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Total attempts per fetch; the delay doubles after each failed attempt.
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 500;

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| AppError::usage("Missing FRED_API_KEY in environment (.env)."))?;
        Self::new(api_key)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::data(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Fetch observations for `series_id` over `[start, end]`.
    ///
    /// Rate-limit (429), server (5xx) and transport errors are retried with a
    /// doubling backoff; the request is an idempotent read, so retrying is
    /// safe. Other failures surface immediately.
    pub fn fetch_series(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Series, AppError> {
        let mut delay_ms = INITIAL_BACKOFF_MS;
        let mut attempt = 1;
        loop {
            match self.fetch_once(series_id, start, end) {
                Ok(series) => return Ok(series),
                Err(fetch) => {
                    if !fetch.retryable || attempt >= MAX_ATTEMPTS {
                        return Err(fetch.error);
                    }
                    thread::sleep(Duration::from_millis(delay_ms));
                    delay_ms = delay_ms.saturating_mul(2);
                    attempt += 1;
                }
            }
        }
    }

    fn fetch_once(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Series, FetchError> {
        let start_s = start.to_string();
        let end_s = end.to_string();
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("observation_start", start_s.as_str()),
                ("observation_end", end_s.as_str()),
            ])
            .send()
            .map_err(|e| FetchError {
                retryable: true,
                error: AppError::data(format!("FRED request failed: {e}")),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError {
                retryable: is_retryable_status(status.as_u16()),
                error: AppError::data(format!("FRED request failed with status {status}.")),
            });
        }

        let body: ObservationsResponse = resp.json().map_err(|e| FetchError {
            retryable: false,
            error: AppError::data(format!("Failed to parse FRED response: {e}")),
        })?;

        observations_to_series(series_id, body).map_err(|error| FetchError {
            retryable: false,
            error,
        })
    }
}

struct FetchError {
    retryable: bool,
    error: AppError,
}

fn is_retryable_status(code: u16) -> bool {
    code == 429 || (500..=599).contains(&code)
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<ObservationRow>,
}

#[derive(Debug, Deserialize)]
struct ObservationRow {
    date: String,
    value: String,
}

fn observations_to_series(
    series_id: &str,
    body: ObservationsResponse,
) -> Result<Series, AppError> {
    let mut out = Vec::with_capacity(body.observations.len());
    for row in body.observations {
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|e| AppError::data(format!("Invalid FRED date '{}': {e}", row.date)))?;
        out.push(Observation {
            date,
            value: parse_value(&row.value),
        });
    }
    // Series::new sorts and resolves duplicate dates last-write-wins.
    Ok(Series::new(series_id, out))
}

/// FRED encodes missing observations as `"."`; non-finite values are also
/// treated as absent rather than poisoning downstream math.
fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_handles_missing_markers() {
        assert_eq!(parse_value("1.25"), Some(1.25));
        assert_eq!(parse_value(" 3.0 "), Some(3.0));
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("abc"), None);
    }

    #[test]
    fn retryable_status_classification() {
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(401));
        assert!(!is_retryable_status(404));
    }

    #[test]
    fn response_rows_become_a_normalized_series() {
        let json = r#"{
            "observations": [
                {"date": "2024-02-01", "value": "2.5"},
                {"date": "2024-01-01", "value": "."},
                {"date": "2024-03-01", "value": "3.0"}
            ]
        }"#;
        let body: ObservationsResponse = serde_json::from_str(json).unwrap();
        let series = observations_to_series("UNRATE", body).unwrap();
        assert_eq!(series.id, "UNRATE");
        assert_eq!(series.len(), 3);
        // Sorted ascending; "." kept as an absent value.
        assert_eq!(series.observations[0].value, None);
        assert_eq!(series.observations[1].value, Some(2.5));
        assert_eq!(series.observations[2].value, Some(3.0));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let json = r#"{"observations": [{"date": "02/01/2024", "value": "2.5"}]}"#;
        let body: ObservationsResponse = serde_json::from_str(json).unwrap();
        assert!(observations_to_series("UNRATE", body).is_err());
    }
}
