//! End-to-end estimate: remote climate inputs plus the formula chain

use thiserror::Error;
use tracing::info;

use crate::climate::{ClimateDataClient, DesignIndexQuery, RemoteDataError, TemperatureQuery};
use crate::core_types::{FreezeSeason, SoilProfile};
use crate::physics::{modified_berggren_depth, FrostDepthResult, NumericDomainError};

/// Failure of a complete frost-depth estimate.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// A climate lookup failed.
    #[error(transparent)]
    Remote(#[from] RemoteDataError),
    /// The formula chain produced a non-finite value.
    #[error(transparent)]
    Numeric(#[from] NumericDomainError),
}

/// Resolve both climate inputs for a location and run the frost-depth
/// pipeline.
///
/// The two lookups do not depend on each other and are issued sequentially.
/// The fetched mean annual temperature also serves as the mean annual
/// ground temperature.
///
/// # Errors
/// [`EstimateError`] when either lookup fails, or when the fetched design
/// freezing index is not positive and the chain degenerates.
pub fn estimate_frost_depth(
    client: &ClimateDataClient,
    temperature: TemperatureQuery,
    design_index: DesignIndexQuery,
    soil: SoilProfile,
    season: FreezeSeason,
) -> Result<FrostDepthResult, EstimateError> {
    let mat = client.fetch_mean_annual_temperature(temperature)?;
    let design_fi = client.fetch_design_freezing_index(design_index)?;
    info!("climate inputs resolved: MAT {mat}°F, design freezing index {design_fi} °F·days");

    let depth = modified_berggren_depth(soil, season, mat, design_fi)?;
    info!("computed frost depth: {depth}");
    Ok(depth)
}
