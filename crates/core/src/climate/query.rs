//! Validated parameter records for the two remote lookups

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::selectors::{ClimateModel, DesignIndexModel, Era, Scenario};
use crate::core_types::{GeoPoint, InputRangeError};

/// Projection years served by the temperature endpoint.
pub const PROJECTION_YEARS: RangeInclusive<i32> = 2007..=2100;

/// Parameters for one mean-annual-temperature lookup.
///
/// The year range selects which projected annual values enter the summary
/// mean; both endpoints are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureQuery {
    point: GeoPoint,
    model: ClimateModel,
    scenario: Scenario,
    year_start: i32,
    year_end: i32,
}

impl TemperatureQuery {
    /// Build a temperature query, rejecting year ranges outside the
    /// projection window or with start after end.
    pub fn new(
        point: GeoPoint,
        model: ClimateModel,
        scenario: Scenario,
        year_start: i32,
        year_end: i32,
    ) -> Result<Self, InputRangeError> {
        for (field, year) in [("start year", year_start), ("end year", year_end)] {
            if !PROJECTION_YEARS.contains(&year) {
                return Err(InputRangeError::OutOfRange {
                    field,
                    value: f64::from(year),
                    range: "[2007, 2100]",
                });
            }
        }
        if year_start > year_end {
            return Err(InputRangeError::InvertedYearRange {
                start: year_start,
                end: year_end,
            });
        }
        Ok(Self {
            point,
            model,
            scenario,
            year_start,
            year_end,
        })
    }

    /// Queried location.
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Selected circulation model.
    pub fn model(&self) -> ClimateModel {
        self.model
    }

    /// Selected emissions scenario.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// First projection year of the summary window.
    pub fn year_start(&self) -> i32 {
        self.year_start
    }

    /// Last projection year of the summary window.
    pub fn year_end(&self) -> i32 {
        self.year_end
    }
}

/// Parameters for one design-freezing-index lookup.
///
/// Model and era are already constrained by their enum types, so
/// construction cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignIndexQuery {
    point: GeoPoint,
    model: DesignIndexModel,
    era: Era,
}

impl DesignIndexQuery {
    /// Build a design-index query.
    pub fn new(point: GeoPoint, model: DesignIndexModel, era: Era) -> Self {
        Self { point, model, era }
    }

    /// Queried location.
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Selected circulation model.
    pub fn model(&self) -> DesignIndexModel {
        self.model
    }

    /// Selected summary era.
    pub fn era(&self) -> Era {
        self.era
    }
}
