//! Soil thermal properties

use serde::{Deserialize, Serialize};

use crate::core_types::InputRangeError;

/// Thermal description of the soil column being frozen.
///
/// Units follow the customary US frost-design system: pounds, feet, BTU, °F.
/// All three fields are strictly positive by construction; the latent-heat
/// formula in particular relies on a non-zero water content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    dry_density: f64,
    water_content_pct: f64,
    avg_thermal_conductivity: f64,
}

impl SoilProfile {
    /// Validate and build a profile.
    ///
    /// # Arguments
    /// * `dry_density` - Dry unit weight, lb/ft³, in (20, 135]
    /// * `water_content_pct` - Gravimetric water content, percent, in [1, 50]
    /// * `avg_thermal_conductivity` - Average of frozen and unfrozen
    ///   conductivity, BTU/(ft·hr·°F), in (0.01, 2.0]
    pub fn new(
        dry_density: f64,
        water_content_pct: f64,
        avg_thermal_conductivity: f64,
    ) -> Result<Self, InputRangeError> {
        if !(dry_density > 20.0 && dry_density <= 135.0) {
            return Err(InputRangeError::OutOfRange {
                field: "dry density",
                value: dry_density,
                range: "(20, 135] lb/ft³",
            });
        }
        if !(1.0..=50.0).contains(&water_content_pct) {
            return Err(InputRangeError::OutOfRange {
                field: "water content",
                value: water_content_pct,
                range: "[1, 50] percent",
            });
        }
        if !(avg_thermal_conductivity > 0.01 && avg_thermal_conductivity <= 2.0) {
            return Err(InputRangeError::OutOfRange {
                field: "average thermal conductivity",
                value: avg_thermal_conductivity,
                range: "(0.01, 2.0] BTU/(ft·hr·°F)",
            });
        }
        Ok(Self {
            dry_density,
            water_content_pct,
            avg_thermal_conductivity,
        })
    }

    /// Dry unit weight, lb/ft³.
    pub fn dry_density(&self) -> f64 {
        self.dry_density
    }

    /// Gravimetric water content, percent.
    pub fn water_content_pct(&self) -> f64 {
        self.water_content_pct
    }

    /// Average of frozen and unfrozen thermal conductivity, BTU/(ft·hr·°F).
    pub fn avg_thermal_conductivity(&self) -> f64 {
        self.avg_thermal_conductivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_alaska_soils() {
        assert!(SoilProfile::new(100.0, 15.0, 0.78).is_ok(), "silty default");
        assert!(SoilProfile::new(135.0, 1.0, 2.0).is_ok(), "dense, dry, conductive");
        assert!(SoilProfile::new(20.1, 50.0, 0.02).is_ok(), "light, saturated, insulating");
    }

    #[test]
    fn test_open_bounds_exclude_their_endpoint() {
        assert!(
            SoilProfile::new(20.0, 15.0, 0.78).is_err(),
            "20 lb/ft³ sits on the open density bound"
        );
        assert!(
            SoilProfile::new(100.0, 15.0, 0.01).is_err(),
            "0.01 sits on the open conductivity bound"
        );
    }

    #[test]
    fn test_closed_bounds_reject_just_outside() {
        assert!(SoilProfile::new(135.1, 15.0, 0.78).is_err());
        assert!(SoilProfile::new(100.0, 0.9, 0.78).is_err(), "below 1% water");
        assert!(SoilProfile::new(100.0, 50.1, 0.78).is_err());
        assert!(SoilProfile::new(100.0, 15.0, 2.1).is_err());
    }

    #[test]
    fn test_error_reports_value_and_units() {
        match SoilProfile::new(100.0, 0.0, 0.78) {
            Err(InputRangeError::OutOfRange { field, value, range }) => {
                assert_eq!(field, "water content");
                assert_eq!(value, 0.0);
                assert!(range.contains("percent"));
            }
            other => panic!("expected water content rejection, got {other:?}"),
        }
    }
}
