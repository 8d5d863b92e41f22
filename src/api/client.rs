//! HTTP API Client
//!
//! Functions for fetching statistics from the disease.sh REST API. Each
//! operation is a single round trip with no retry and no timeout; failures
//! are reported to the selection controller and nowhere else.

use gloo_net::http::Request;
use thiserror::Error;

use crate::state::global::{Country, RegionCode, RegionSummary, Timeline};

/// Base URL of the statistics service
pub const API_BASE: &str = "https://disease.sh/v3/covid-19";

/// Days of worldwide history requested for the trend chart
pub const HISTORY_DAYS: u32 = 120;

/// Errors produced by the fetch layer
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent, no response arrived, or the service
    /// answered with a non-success status.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid JSON for the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Endpoint serving the summary for a region: the global endpoint for the
/// worldwide sentinel, the per-country endpoint otherwise.
pub fn summary_url(region: &RegionCode) -> String {
    match region {
        RegionCode::Worldwide => format!("{}/all", API_BASE),
        RegionCode::Country(code) => format!("{}/countries/{}", API_BASE, code),
    }
}

/// Fetch the worldwide summary
pub async fn fetch_global_summary() -> Result<RegionSummary, FetchError> {
    get_json(&format!("{}/all", API_BASE)).await
}

/// Fetch the full per-country record list
pub async fn fetch_countries() -> Result<Vec<Country>, FetchError> {
    get_json(&format!("{}/countries", API_BASE)).await
}

/// Fetch the summary for a single country
pub async fn fetch_country_summary(code: &str) -> Result<RegionSummary, FetchError> {
    get_json(&format!("{}/countries/{}", API_BASE, code)).await
}

/// Fetch the summary for a region, dispatching on the worldwide sentinel
pub async fn fetch_summary(region: &RegionCode) -> Result<RegionSummary, FetchError> {
    get_json(&summary_url(region)).await
}

/// Fetch the worldwide cumulative history for the last `last_days` days
pub async fn fetch_historical(last_days: u32) -> Result<Timeline, FetchError> {
    get_json(&format!("{}/historical/all?lastdays={}", API_BASE, last_days)).await
}

/// One GET round trip, decoded as JSON
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_url_dispatches_on_sentinel() {
        assert_eq!(
            summary_url(&RegionCode::Worldwide),
            "https://disease.sh/v3/covid-19/all"
        );
        assert_eq!(
            summary_url(&RegionCode::Country("US".to_string())),
            "https://disease.sh/v3/covid-19/countries/US"
        );
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = FetchError::Parse("missing field".to_string());
        assert_eq!(err.to_string(), "parse error: missing field");
    }
}
