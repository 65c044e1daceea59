//! Freezing-season descriptors

use serde::{Deserialize, Serialize};

use crate::core_types::InputRangeError;

/// Length of the freezing season and the air-to-surface transfer factor.
///
/// The n-factor scales an *air* freezing index from the climate service to
/// the index actually felt at the ground surface; pavement and vegetation
/// cover determine it empirically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreezeSeason {
    duration_days: u32,
    n_factor: f64,
}

impl FreezeSeason {
    /// Validate and build a season.
    ///
    /// # Arguments
    /// * `duration_days` - Length of the freezing season, days, in [30, 300]
    /// * `n_factor` - Air-to-surface transfer factor, dimensionless, in (0, 1]
    pub fn new(duration_days: u32, n_factor: f64) -> Result<Self, InputRangeError> {
        if !(30..=300).contains(&duration_days) {
            return Err(InputRangeError::OutOfRange {
                field: "freeze duration",
                value: f64::from(duration_days),
                range: "[30, 300] days",
            });
        }
        if !(n_factor > 0.0 && n_factor <= 1.0) {
            return Err(InputRangeError::OutOfRange {
                field: "n-factor",
                value: n_factor,
                range: "(0, 1] dimensionless",
            });
        }
        Ok(Self {
            duration_days,
            n_factor,
        })
    }

    /// Length of the freezing season, days.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Air-to-surface transfer factor, dimensionless.
    pub fn n_factor(&self) -> f64 {
        self.n_factor
    }

    /// Surface freezing index `nFI = n × FI`, °F·days.
    ///
    /// Converts an air freezing index (typically a design value fetched from
    /// the climate service) into the index at the ground surface.
    pub fn surface_freezing_index(&self, air_freezing_index: f64) -> f64 {
        self.n_factor * air_freezing_index
    }
}
