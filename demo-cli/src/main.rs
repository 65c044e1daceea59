//! Frost depth estimator for Alaska sites under projected climates.
//!
//! Resolves a mean annual temperature and a design freezing index from the
//! SNAP Data API for the requested location, then evaluates the modified
//! Berggren equation for the described soil column and freezing season.
//! Defaults reproduce the published interior-Alaska worked example.

use std::str::FromStr;

use clap::Parser;
use modberg_core::{
    modified_berggren_depth, ClimateDataClient, ClimateModel, DesignIndexModel, DesignIndexQuery,
    Era, FreezeSeason, GeoPoint, Scenario, SoilProfile, TemperatureQuery, DEFAULT_BASE_URL,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "modberg",
    version,
    about = "Modified Berggren frost depth from downscaled Alaska climate projections"
)]
struct Cli {
    /// Site latitude, decimal degrees north
    #[arg(long, default_value_t = 65.0)]
    lat: f64,

    /// Site longitude, decimal degrees (negative west)
    #[arg(long, default_value_t = -147.0, allow_negative_numbers = true)]
    lon: f64,

    /// Circulation model for the temperature lookup
    #[arg(long, default_value_t = ClimateModel::GfdlCm3, value_parser = ClimateModel::from_str)]
    model: ClimateModel,

    /// Emissions scenario for the temperature lookup
    #[arg(long, default_value_t = Scenario::Rcp60, value_parser = Scenario::from_str)]
    scenario: Scenario,

    /// First projection year averaged into the mean annual temperature
    #[arg(long, default_value_t = 2040)]
    year_start: i32,

    /// Last projection year averaged into the mean annual temperature
    #[arg(long, default_value_t = 2069)]
    year_end: i32,

    /// Circulation model for the design freezing index lookup
    #[arg(long, default_value_t = DesignIndexModel::GfdlCm3, value_parser = DesignIndexModel::from_str)]
    di_model: DesignIndexModel,

    /// Summary era for the design freezing index lookup
    #[arg(long, default_value_t = Era::MidCentury, value_parser = Era::from_str)]
    era: Era,

    /// Soil dry unit weight, lb/ft³
    #[arg(long, default_value_t = 100.0)]
    dry_density: f64,

    /// Soil gravimetric water content, percent of dry weight
    #[arg(long, default_value_t = 15.0)]
    water_content: f64,

    /// Average of frozen and unfrozen thermal conductivity, BTU/(ft·hr·°F)
    #[arg(long, default_value_t = 0.78)]
    conductivity: f64,

    /// Length of the freezing season, days
    #[arg(long, default_value_t = 160)]
    duration: u32,

    /// Surface transfer n-factor applied to the air freezing index
    #[arg(long, default_value_t = 0.75)]
    n_factor: f64,

    /// Climate service host, overridable for mirrors and tests
    #[arg(long, default_value_t = DEFAULT_BASE_URL.to_owned())]
    base_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let point = GeoPoint::new(cli.lat, cli.lon)?;
    let soil = SoilProfile::new(cli.dry_density, cli.water_content, cli.conductivity)?;
    let season = FreezeSeason::new(cli.duration, cli.n_factor)?;
    let temperature =
        TemperatureQuery::new(point, cli.model, cli.scenario, cli.year_start, cli.year_end)?;
    let design_index = DesignIndexQuery::new(point, cli.di_model, cli.era);

    let client = ClimateDataClient::with_base_url(cli.base_url)?;

    let mat = client.fetch_mean_annual_temperature(temperature)?;
    println!("Mean Annual Temperature: {mat}°F");

    let design_fi = client.fetch_design_freezing_index(design_index)?;
    println!("Design Freezing Index: {design_fi} °F days");

    let result = modified_berggren_depth(soil, season, mat, design_fi)?;
    println!("COMPUTED FROST DEPTH (FT.): {}", result.depth_ft());

    Ok(())
}
