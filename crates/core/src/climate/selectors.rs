//! Enumerated selector vocabulary of the SNAP Data API
//!
//! The service keys its responses by model, scenario, and era strings.
//! Modeling the vocabulary as enums rejects a misspelled selector before any
//! request is issued, so a missing branch in a live response can only mean
//! the service itself changed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core_types::InputRangeError;

/// CMIP5 general circulation models with downscaled temperature projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateModel {
    /// Geophysical Fluid Dynamics Laboratory CM3
    #[serde(rename = "GFDL-CM3")]
    GfdlCm3,
    /// National Center for Atmospheric Research CCSM4
    #[serde(rename = "NCAR-CCSM4")]
    NcarCcsm4,
    /// Goddard Institute for Space Studies E2-R
    #[serde(rename = "GISS-E2-R")]
    GissE2R,
    /// Institut Pierre-Simon Laplace CM5A-LR
    #[serde(rename = "IPSL-CM5A-LR")]
    IpslCm5aLr,
    /// Meteorological Research Institute CGCM3
    #[serde(rename = "MRI-CGCM3")]
    MriCgcm3,
}

impl ClimateModel {
    /// The key this model is listed under in temperature responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateModel::GfdlCm3 => "GFDL-CM3",
            ClimateModel::NcarCcsm4 => "NCAR-CCSM4",
            ClimateModel::GissE2R => "GISS-E2-R",
            ClimateModel::IpslCm5aLr => "IPSL-CM5A-LR",
            ClimateModel::MriCgcm3 => "MRI-CGCM3",
        }
    }
}

impl fmt::Display for ClimateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimateModel {
    type Err = InputRangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "gfdl-cm3" => Ok(ClimateModel::GfdlCm3),
            "ncar-ccsm4" => Ok(ClimateModel::NcarCcsm4),
            "giss-e2-r" => Ok(ClimateModel::GissE2R),
            "ipsl-cm5a-lr" => Ok(ClimateModel::IpslCm5aLr),
            "mri-cgcm3" => Ok(ClimateModel::MriCgcm3),
            _ => Err(InputRangeError::UnknownSelector {
                kind: "climate model",
                value: input.to_owned(),
                expected: "GFDL-CM3, NCAR-CCSM4, GISS-E2-R, IPSL-CM5A-LR, MRI-CGCM3",
            }),
        }
    }
}

/// The model subset with design freezing index summaries available.
///
/// The design-index endpoint only serves two of the five downscaled models,
/// so it gets its own selector type rather than a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignIndexModel {
    /// Geophysical Fluid Dynamics Laboratory CM3
    #[serde(rename = "GFDL-CM3")]
    GfdlCm3,
    /// National Center for Atmospheric Research CCSM4
    #[serde(rename = "NCAR-CCSM4")]
    NcarCcsm4,
}

impl DesignIndexModel {
    /// The key this model is listed under in design-index responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignIndexModel::GfdlCm3 => "GFDL-CM3",
            DesignIndexModel::NcarCcsm4 => "NCAR-CCSM4",
        }
    }
}

impl fmt::Display for DesignIndexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignIndexModel {
    type Err = InputRangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "gfdl-cm3" => Ok(DesignIndexModel::GfdlCm3),
            "ncar-ccsm4" => Ok(DesignIndexModel::NcarCcsm4),
            _ => Err(InputRangeError::UnknownSelector {
                kind: "design index model",
                value: input.to_owned(),
                expected: "GFDL-CM3, NCAR-CCSM4",
            }),
        }
    }
}

/// Representative Concentration Pathway emissions scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// RCP 4.5, intermediate emissions
    #[serde(rename = "rcp45")]
    Rcp45,
    /// RCP 6.0, intermediate-high emissions. Catalogued as `rcp6` in some
    /// indexes; both spellings parse.
    #[serde(rename = "rcp60")]
    Rcp60,
    /// RCP 8.5, high emissions
    #[serde(rename = "rcp85")]
    Rcp85,
}

impl Scenario {
    /// The key this scenario is listed under in temperature responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Rcp45 => "rcp45",
            Scenario::Rcp60 => "rcp60",
            Scenario::Rcp85 => "rcp85",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = InputRangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "rcp45" => Ok(Scenario::Rcp45),
            "rcp60" | "rcp6" => Ok(Scenario::Rcp60),
            "rcp85" => Ok(Scenario::Rcp85),
            _ => Err(InputRangeError::UnknownSelector {
                kind: "emissions scenario",
                value: input.to_owned(),
                expected: "rcp45, rcp60, rcp85",
            }),
        }
    }
}

/// Fixed 30-year summary windows served by the design-index endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    /// Mid-century window, 2040-2069
    #[serde(rename = "2040-2069")]
    MidCentury,
    /// Late-century window, 2070-2099
    #[serde(rename = "2070-2099")]
    LateCentury,
}

impl Era {
    /// The key this era is listed under in design-index responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Era::MidCentury => "2040-2069",
            Era::LateCentury => "2070-2099",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = InputRangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "2040-2069" => Ok(Era::MidCentury),
            "2070-2099" => Ok(Era::LateCentury),
            _ => Err(InputRangeError::UnknownSelector {
                kind: "summary era",
                value: input.to_owned(),
                expected: "2040-2069, 2070-2099",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parsing_is_case_insensitive() {
        assert_eq!(
            "gfdl-cm3".parse::<ClimateModel>(),
            Ok(ClimateModel::GfdlCm3)
        );
        assert_eq!(
            "IPSL-CM5A-LR".parse::<ClimateModel>(),
            Ok(ClimateModel::IpslCm5aLr)
        );
        assert_eq!(
            ClimateModel::MriCgcm3.as_str().parse::<ClimateModel>(),
            Ok(ClimateModel::MriCgcm3)
        );
    }

    #[test]
    fn test_rcp6_is_an_alias_for_rcp60() {
        assert_eq!("rcp6".parse::<Scenario>(), Ok(Scenario::Rcp60));
        assert_eq!("rcp60".parse::<Scenario>(), Ok(Scenario::Rcp60));
        assert_eq!(Scenario::Rcp60.as_str(), "rcp60", "wire key is never rcp6");
    }

    #[test]
    fn test_unknown_selectors_are_rejected() {
        let err = "HadGEM2-ES".parse::<ClimateModel>().unwrap_err();
        assert!(matches!(
            err,
            InputRangeError::UnknownSelector {
                kind: "climate model",
                ..
            }
        ));
        assert!("rcp26".parse::<Scenario>().is_err());
        assert!("2010-2039".parse::<Era>().is_err());
    }

    #[test]
    fn test_design_index_subset_excludes_other_models() {
        // GISS-E2-R has temperature projections but no design-index summary
        assert!("GISS-E2-R".parse::<ClimateModel>().is_ok());
        assert!("GISS-E2-R".parse::<DesignIndexModel>().is_err());
        assert_eq!(
            "ncar-ccsm4".parse::<DesignIndexModel>(),
            Ok(DesignIndexModel::NcarCcsm4)
        );
    }

    #[test]
    fn test_display_matches_the_wire_key() {
        assert_eq!(ClimateModel::GissE2R.to_string(), "GISS-E2-R");
        assert_eq!(Scenario::Rcp85.to_string(), "rcp85");
        assert_eq!(Era::LateCentury.to_string(), "2070-2099");
        assert_eq!(DesignIndexModel::GfdlCm3.to_string(), "GFDL-CM3");
    }
}
