//! Remote climate-data lookups against the SNAP Data API
//!
//! The frost-depth pipeline takes two climate inputs that come from the
//! SNAP (Scenarios Network for Alaska + Arctic Planning) Data API at
//! `earthmaps.io`:
//!
//! - projected mean annual temperature, summarized over a year window from
//!   the `mmm/temperature` endpoint, and
//! - a design freezing index summarized by 30-year era from the
//!   `design_index/freezing` endpoint.
//!
//! Selectors are enumerated types, so an unknown model, scenario, or era is
//! rejected before a request is issued. Each lookup is one network read
//! reflecting the live remote value; nothing is cached or retried.

pub(crate) mod client;
pub(crate) mod query;
pub(crate) mod response;
pub(crate) mod selectors;

pub use client::{ClimateDataClient, DEFAULT_BASE_URL};
pub use query::{DesignIndexQuery, TemperatureQuery, PROJECTION_YEARS};
pub use selectors::{ClimateModel, DesignIndexModel, Era, Scenario};

use thiserror::Error;

/// Failure fetching or decoding a remote climate value.
///
/// Never retried and never substituted with a default. One failed lookup
/// fails the whole computation attempt.
#[derive(Error, Debug)]
pub enum RemoteDataError {
    /// Transport failure or a non-success HTTP status.
    #[error("climate service request failed")]
    Http(#[from] reqwest::Error),

    /// Body that is not JSON of the documented shape.
    #[error("climate response was not the documented JSON shape")]
    Json(#[from] serde_json::Error),

    /// A model, scenario, era, or summary-field branch the response lacks.
    #[error("climate response has no \"{key}\" branch")]
    MissingKey {
        /// The branch that was selected but absent.
        key: String,
    },

    /// A period key whose leading segment is not a year.
    #[error("period key \"{key}\" does not start with a year")]
    PeriodKey {
        /// The offending period key.
        key: String,
    },

    /// A summary field that should carry a number but does not.
    #[error("climate response field \"{key}\" is not numeric")]
    NonNumeric {
        /// The non-numeric field.
        key: String,
    },

    /// A year window that matched no projected values.
    #[error("no projected values between {start} and {end}")]
    EmptyYearRange {
        /// Requested first year.
        start: i32,
        /// Requested last year.
        end: i32,
    },
}
