//! Modified Berggren Frost Depth Model (1953)
//!
//! Implements the Modified Berggren equation, the standard engineering method
//! for estimating seasonal frost penetration beneath pavements and foundations.
//! The lambda coefficient corrects the Stefan solution for the sensible heat
//! stored in the soil mass.
//!
//! # References
//! - Aldrich, H.P., Paynter, H.M. (1953). "Analytical Studies of Freezing and
//!   Thawing of Soils." Arctic Construction and Frost Effects Laboratory,
//!   Corps of Engineers, U.S. Army, First Interim Technical Report 42.
//! - Departments of the Army and the Air Force (1988). "Arctic and Subarctic
//!   Construction: Calculation Methods for Determination of Depths of Freeze
//!   and Thaw in Soils." TM 5-852-6 / AFR 88-19, Volume 6.
//! - Andersland, O.B., Ladanyi, B. (2004). "Frozen Ground Engineering."
//!   2nd edition, Wiley.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::core_types::{FreezeSeason, SoilProfile};
use crate::rounding::round_to;

/// Calculate volumetric latent heat of fusion (L) in BTU/ft³
///
/// The heat required to freeze (or melt) all pore water in a unit volume of
/// soil. 144 BTU/lb is the latent heat of fusion of water.
///
/// # Formula
/// ```text
/// L = 144 × ρ_d × (w / 100)
/// ```
///
/// Where:
/// - **ρ_d** = Soil dry density (lb/ft³)
/// - **w** = Water content (percent)
///
/// Rounded to 2 decimals, as consumed by the pipeline.
pub fn calculate_latent_heat(dry_density_pcf: f64, water_content_pct: f64) -> f64 {
    let latent_heat = 144.0 * dry_density_pcf * (water_content_pct / 100.0);
    round_to(latent_heat, 2)
}

/// Volumetric specific heat with the pore water in a given phase.
///
/// 0.17 BTU/(lb·°F) is the specific heat of soil solids for most soils; the
/// phase coefficient weights the water term (frozen ice 0.5, unfrozen water
/// 1.0, seasonal average 0.75). The moisture fraction is computed first and
/// then scaled; regrouping shifts the last bit of the result.
fn specific_heat(dry_density_pcf: f64, water_content_pct: f64, phase_coefficient: f64) -> f64 {
    let heat = dry_density_pcf * (0.17 + phase_coefficient * (water_content_pct / 100.0));
    round_to(heat, 2)
}

/// Calculate frozen volumetric specific heat (c_f) in BTU/(ft³·°F)
///
/// Heat required to change the temperature of a fully frozen unit volume of
/// soil by 1 °F.
///
/// # Formula
/// ```text
/// c_f = ρ_d × (0.17 + 0.5 × (w / 100))
/// ```
///
/// Rounded to 2 decimals.
pub fn calculate_frozen_specific_heat(dry_density_pcf: f64, water_content_pct: f64) -> f64 {
    specific_heat(dry_density_pcf, water_content_pct, 0.5)
}

/// Calculate unfrozen volumetric specific heat (c_u) in BTU/(ft³·°F)
///
/// Heat required to change the temperature of an unfrozen unit volume of
/// soil by 1 °F.
///
/// # Formula
/// ```text
/// c_u = ρ_d × (0.17 + 1.0 × (w / 100))
/// ```
///
/// Rounded to 2 decimals.
pub fn calculate_unfrozen_specific_heat(dry_density_pcf: f64, water_content_pct: f64) -> f64 {
    specific_heat(dry_density_pcf, water_content_pct, 1.0)
}

/// Calculate average volumetric specific heat (c) in BTU/(ft³·°F)
///
/// The seasonal average of the frozen and unfrozen states; this is the
/// variant the frost-depth pipeline consumes.
///
/// # Formula
/// ```text
/// c = ρ_d × (0.17 + 0.75 × (w / 100))
/// ```
///
/// Rounded to 2 decimals.
pub fn calculate_avg_specific_heat(dry_density_pcf: f64, water_content_pct: f64) -> f64 {
    specific_heat(dry_density_pcf, water_content_pct, 0.75)
}

/// Calculate the seasonal surface temperature differential (v_s) in °F
///
/// The average amount by which the ground surface sits below freezing over
/// the season, i.e. the surface freezing index spread over its duration.
///
/// # Formula
/// ```text
/// v_s = nFI / d
/// ```
///
/// Where:
/// - **nFI** = Surface freezing index (°F·days)
/// - **d** = Freezing duration (days)
///
/// Not rounded.
pub fn calculate_surface_differential(surface_freezing_index: f64, duration_days: f64) -> f64 {
    surface_freezing_index / duration_days
}

/// Calculate the multiyear surface temperature differential (v_s) in °F
///
/// v_s has two meanings in the literature depending on the problem studied.
/// This variant serves multiyear freeze depths that develop from a long-term
/// shift in the surface heat balance; the seasonal pipeline does not use it.
///
/// # Formula
/// ```text
/// v_s = |MAT − 32|
/// ```
///
/// Not rounded.
pub fn calculate_multiyear_surface_differential(mean_annual_temp_degf: f64) -> f64 {
    (mean_annual_temp_degf - 32.0).abs()
}

/// Calculate the initial temperature differential (v_o) in °F
///
/// The absolute difference between the mean annual temperature *below* the
/// ground surface and freezing.
///
/// # Formula
/// ```text
/// v_o = |MAGT − 32|
/// ```
///
/// Not rounded.
pub fn calculate_initial_differential(mean_ground_temp_degf: f64) -> f64 {
    (mean_ground_temp_degf - 32.0).abs()
}

/// Calculate the thermal ratio (dimensionless)
///
/// Ratio of the ground-to-freezing delta over the surface-to-freezing delta;
/// governs the curvature of the advancing freeze front.
///
/// # Formula
/// ```text
/// thermal_ratio = v_o / v_s
/// ```
///
/// Rounded to 3 decimals.
pub fn calculate_thermal_ratio(v_o: f64, v_s: f64) -> f64 {
    round_to(v_o / v_s, 3)
}

/// Calculate the fusion parameter (mu, dimensionless)
///
/// Relates the sensible heat capacity of the soil to its latent heat of
/// fusion, scaled by the surface freezing intensity.
///
/// # Formula
/// ```text
/// mu = v_s × (c / L)
/// ```
///
/// Rounded to 3 decimals.
pub fn calculate_fusion_parameter(v_s: f64, specific_heat: f64, latent_heat: f64) -> f64 {
    round_to(v_s * (specific_heat / latent_heat), 3)
}

/// Calculate the lambda coefficient (dimensionless)
///
/// Empirical correction factor approximating the nonlinear Stefan solution
/// for frost penetration (Aldrich & Paynter 1953).
///
/// # Formula
/// ```text
/// λ = 1 / sqrt(1 + mu × (thermal_ratio + 0.5))
/// ```
///
/// The literature also documents an alternative formula with a 0.707
/// numerator (better suited to lower latitudes, may underestimate at high
/// ones) and an averaging of the two; only the high-latitude single formula
/// is implemented here.
///
/// Rounded to 2 decimals.
pub fn calculate_lambda_coefficient(fusion_parameter: f64, thermal_ratio: f64) -> f64 {
    let coeff = 1.0 / (1.0 + fusion_parameter * (thermal_ratio + 0.5)).sqrt();
    round_to(coeff, 2)
}

/// Calculate the depth of freezing (x) in feet
///
/// The depth to which 32 °F temperatures penetrate the soil mass over the
/// season. 48 converts the daily freezing index to the hourly basis of the
/// thermal conductivity (×24) and carries the factor 2 of the Stefan
/// solution.
///
/// # Formula
/// ```text
/// x = λ × sqrt((48 × k_avg × nFI) / L)
/// ```
///
/// Where:
/// - **λ** = Lambda coefficient (dimensionless)
/// - **k_avg** = Average thermal conductivity (BTU/(ft·hr·°F))
/// - **nFI** = Surface freezing index (°F·days)
/// - **L** = Volumetric latent heat of fusion (BTU/ft³)
///
/// Rounded to 1 decimal; this is the published result.
pub fn calculate_depth_of_freezing(
    lambda_coefficient: f64,
    k_avg: f64,
    surface_freezing_index: f64,
    latent_heat: f64,
) -> f64 {
    let depth = lambda_coefficient * ((48.0 * k_avg * surface_freezing_index) / latent_heat).sqrt();
    round_to(depth, 1)
}

/// Final frost-penetration estimate, feet, rounded to 1 decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrostDepthResult {
    depth_ft: f64,
}

impl FrostDepthResult {
    /// Depth to which 32 °F penetrates the soil column, feet.
    pub fn depth_ft(&self) -> f64 {
        self.depth_ft
    }
}

impl fmt::Display for FrostDepthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ft", self.depth_ft)
    }
}

/// A non-finite value escaped the formula chain.
///
/// The validated input records guarantee positive latent heat and duration,
/// so this is reachable only through the unvalidated climate inputs: a zero
/// or negative design freezing index (possible for a warm location) zeroes
/// the surface differential and the chain degenerates to NaN.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("frost depth evaluated to a non-finite value ({value}); the surface freezing index and latent heat must be positive")]
pub struct NumericDomainError {
    value: f64,
}

impl NumericDomainError {
    /// The offending non-finite result.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Run the Modified Berggren pipeline for one location and season.
///
/// Each step consumes the previous step's *rounded* output; rounding is part
/// of the published method, not a display concern, and reordering or
/// deferring it changes the final answer at the 0.1 ft level.
///
/// The mean annual ground temperature is taken equal to the mean annual air
/// temperature, a documented simplifying assumption, so the function has no
/// separate ground-temperature parameter.
///
/// # Arguments
/// * `soil` - Validated soil column properties
/// * `season` - Validated freezing-season descriptor
/// * `mean_annual_temp_degf` - Projected mean annual air temperature (°F)
/// * `design_freezing_index` - Design air freezing index (°F·days)
///
/// # Returns
/// Frost depth in feet, rounded to 1 decimal.
///
/// # Errors
/// [`NumericDomainError`] if the chain produces a non-finite value, which
/// the validated inputs only allow through a non-positive design freezing
/// index.
///
/// # Example
/// ```
/// use modberg_core::{FreezeSeason, SoilProfile};
/// use modberg_core::physics::modified_berggren_depth;
///
/// let soil = SoilProfile::new(100.0, 15.0, 0.78).unwrap();
/// let season = FreezeSeason::new(160, 0.75).unwrap();
///
/// let result = modified_berggren_depth(soil, season, 20.0, 3000.0).unwrap();
/// assert_eq!(result.depth_ft(), 5.6);
/// ```
pub fn modified_berggren_depth(
    soil: SoilProfile,
    season: FreezeSeason,
    mean_annual_temp_degf: f64,
    design_freezing_index: f64,
) -> Result<FrostDepthResult, NumericDomainError> {
    let n_fi = season.surface_freezing_index(design_freezing_index);

    // 1. Volumetric latent heat of fusion (L)
    let latent_heat = calculate_latent_heat(soil.dry_density(), soil.water_content_pct());

    // 2. Average volumetric specific heat (c)
    let avg_heat = calculate_avg_specific_heat(soil.dry_density(), soil.water_content_pct());

    // 3. Seasonal surface temperature differential (v_s)
    let v_s = calculate_surface_differential(n_fi, f64::from(season.duration_days()));

    // 4. Initial temperature differential (v_o), with MAGT = MAT
    let v_o = calculate_initial_differential(mean_annual_temp_degf);

    // 5. Thermal ratio
    let thermal_ratio = calculate_thermal_ratio(v_o, v_s);

    // 6. Fusion parameter (mu)
    let fusion_parameter = calculate_fusion_parameter(v_s, avg_heat, latent_heat);

    // 7. Lambda coefficient
    let lambda = calculate_lambda_coefficient(fusion_parameter, thermal_ratio);

    // 8. Depth of freezing (x)
    let depth_ft =
        calculate_depth_of_freezing(lambda, soil.avg_thermal_conductivity(), n_fi, latent_heat);

    if depth_ft.is_finite() {
        Ok(FrostDepthResult { depth_ft })
    } else {
        Err(NumericDomainError { value: depth_ft })
    }
}
