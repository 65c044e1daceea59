//! Blocking HTTP access to the SNAP Data API

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use super::query::{DesignIndexQuery, TemperatureQuery};
use super::response::{
    celsius_to_fahrenheit, flatten_period_samples, lookup_branch, mean_over_years, NestedSummaries,
};
use super::RemoteDataError;
use crate::rounding::round_to;

/// Production SNAP Data API host.
pub const DEFAULT_BASE_URL: &str = "https://earthmaps.io";

// Each lookup is a single bounded network read; there is no retry policy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the two climate lookups.
///
/// Holds the connection pool and the service base URL. Construct once and
/// reuse across lookups; there is no other state.
pub struct ClimateDataClient {
    http: Client,
    base_url: String,
}

impl ClimateDataClient {
    /// Client against the production service.
    pub fn new() -> Result<Self, RemoteDataError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate host, for mirrors and tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, RemoteDataError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn get_document(&self, path: &str) -> Result<NestedSummaries, RemoteDataError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {url}");
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the projected mean annual temperature for a location, in °F.
    ///
    /// Selects the queried model and scenario branch, flattens its period
    /// summaries into year-tagged samples, and averages the samples inside
    /// the queried year window. The service reports °C; the mean is
    /// converted and rounded to 1 decimal.
    ///
    /// # Errors
    /// [`RemoteDataError`] on transport failure, an undecodable body, a
    /// missing model or scenario branch, or a year window that matches no
    /// projected values.
    pub fn fetch_mean_annual_temperature(
        &self,
        query: TemperatureQuery,
    ) -> Result<f64, RemoteDataError> {
        let point = query.point();
        let document = self.get_document(&format!(
            "mmm/temperature/all/{}/{}",
            point.latitude(),
            point.longitude()
        ))?;
        let scenarios = lookup_branch(&document, query.model().as_str())?;
        let periods = lookup_branch(scenarios, query.scenario().as_str())?;
        let samples = flatten_period_samples(periods)?;
        let mean_c = mean_over_years(&samples, query.year_start(), query.year_end()).ok_or(
            RemoteDataError::EmptyYearRange {
                start: query.year_start(),
                end: query.year_end(),
            },
        )?;
        let mat = round_to(celsius_to_fahrenheit(mean_c), 1);
        debug!(
            "mean annual temperature {mat}°F over {}-{}",
            query.year_start(),
            query.year_end()
        );
        Ok(mat)
    }

    /// Fetch the design freezing index for a location, in °F·days.
    ///
    /// The service already reports °F·days, so the value passes through
    /// without conversion or rounding.
    ///
    /// # Errors
    /// [`RemoteDataError`] on transport failure, an undecodable body, a
    /// missing model or era branch, or a missing or non-numeric `di` field.
    pub fn fetch_design_freezing_index(
        &self,
        query: DesignIndexQuery,
    ) -> Result<f64, RemoteDataError> {
        let point = query.point();
        let document = self.get_document(&format!(
            "design_index/freezing/all/point/{}/{}",
            point.latitude(),
            point.longitude()
        ))?;
        let eras = lookup_branch(&document, query.model().as_str())?;
        let summary = lookup_branch(eras, query.era().as_str())?;
        let index = lookup_branch(summary, "di")?;
        index.as_f64().ok_or_else(|| RemoteDataError::NonNumeric {
            key: "di".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_against_either_host() {
        assert!(ClimateDataClient::new().is_ok());
        assert!(ClimateDataClient::with_base_url("http://127.0.0.1:9").is_ok());
    }
}
