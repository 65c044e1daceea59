//! Modified Berggren Frost Depth Core Library
//!
//! An engineering estimate of seasonal frost penetration for Alaska
//! locations under projected climates. Combines the Modified Berggren
//! formula chain (Aldrich & Paynter 1953) with downscaled CMIP5 climate
//! inputs fetched from the SNAP Data API.
//!
//! ## One estimate, two lookups
//!
//! A single estimate resolves a projected mean annual temperature and a
//! design freezing index for one location, then runs the pure formula
//! pipeline over validated soil and season records. Nothing is cached or
//! persisted; every estimate reflects the live remote values.

// Validated input records
pub mod core_types;

// Remote climate-data lookups
pub mod climate;

// Thermodynamic formula chain
pub mod physics;

mod estimate;
mod rounding;

// Re-export input records
pub use core_types::{FreezeSeason, GeoPoint, InputRangeError, SoilProfile};

// Re-export climate lookup types
pub use climate::{ClimateDataClient, ClimateModel, DesignIndexModel, DesignIndexQuery};
pub use climate::{Era, RemoteDataError, Scenario, TemperatureQuery, DEFAULT_BASE_URL};

// Re-export the formula pipeline surface
pub use estimate::{estimate_frost_depth, EstimateError};
pub use physics::{modified_berggren_depth, FrostDepthResult, NumericDomainError};
