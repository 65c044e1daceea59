//! Geographic coordinates bounded to the climate service coverage area

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core_types::InputRangeError;

/// Latitude coverage of the climate-projection service, degrees north.
pub const LATITUDE_RANGE: RangeInclusive<f64> = 51.229..=71.3526;

/// Longitude coverage of the climate-projection service, degrees east
/// (all of Alaska lies west of Greenwich, so the range is negative).
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -179.1506..=-129.9795;

/// A latitude/longitude pair inside the Alaska coverage bounding box.
///
/// Constructed through [`GeoPoint::new`], which rejects coordinates outside
/// [`LATITUDE_RANGE`] / [`LONGITUDE_RANGE`], so any `GeoPoint` handed to the
/// climate client names a queryable location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Validate and build a point. Both bounds of each range are inclusive.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InputRangeError> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(InputRangeError::OutOfRange {
                field: "latitude",
                value: latitude,
                range: "[51.229, 71.3526] degrees north",
            });
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(InputRangeError::OutOfRange {
                field: "longitude",
                value: longitude,
                range: "[-179.1506, -129.9795] degrees east",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Degrees north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Degrees east (negative west of Greenwich).
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_interior_and_boundary_coordinates() {
        assert!(GeoPoint::new(65.0, -147.0).is_ok(), "Fairbanks area");
        assert!(GeoPoint::new(51.229, -179.1506).is_ok(), "southwest corner");
        assert!(GeoPoint::new(71.3526, -129.9795).is_ok(), "northeast corner");
    }

    #[test]
    fn test_rejects_coordinates_outside_the_bounding_box() {
        assert!(
            GeoPoint::new(47.6, -122.3).is_err(),
            "Seattle is south and east of coverage"
        );
        assert!(GeoPoint::new(80.0, -147.0).is_err(), "latitude too far north");
        assert!(GeoPoint::new(65.0, 147.0).is_err(), "eastern hemisphere longitude");
        assert!(
            GeoPoint::new(f64::NAN, -147.0).is_err(),
            "NaN never satisfies the bounds"
        );
    }

    #[test]
    fn test_error_names_the_offending_field() {
        match GeoPoint::new(40.0, -147.0) {
            Err(InputRangeError::OutOfRange { field, .. }) => assert_eq!(field, "latitude"),
            other => panic!("expected latitude rejection, got {other:?}"),
        }
    }
}
