//! Thermodynamic formula modules for frost penetration estimation

pub(crate) mod berggren;

pub use berggren::{
    calculate_avg_specific_heat, calculate_depth_of_freezing, calculate_frozen_specific_heat,
    calculate_fusion_parameter, calculate_initial_differential, calculate_lambda_coefficient,
    calculate_latent_heat, calculate_multiyear_surface_differential,
    calculate_surface_differential, calculate_thermal_ratio, calculate_unfrozen_specific_heat,
    modified_berggren_depth, FrostDepthResult, NumericDomainError,
};
