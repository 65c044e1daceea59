//! Climate Lookup Integration Test Suite
//!
//! Exercises both remote lookups against a local stub of the SNAP Data API:
//! a loopback listener that answers each request with a canned JSON body.
//! Every test spawns its own stub, so tests stay independent and parallel.
//!
//! # Test Categories
//! 1. Temperature summaries: branch selection, year filtering, rounding
//! 2. Design-index pass-through
//! 3. Failure surfacing: transport, shape, missing branches, empty windows
//! 4. End-to-end estimate over both lookups
//!
//! Run tests with: `cargo test --test climate_client`

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use modberg_core::{
    estimate_frost_depth, ClimateDataClient, ClimateModel, DesignIndexModel, DesignIndexQuery,
    Era, FreezeSeason, GeoPoint, RemoteDataError, Scenario, SoilProfile, TemperatureQuery,
};

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const TEMPERATURE_FIXTURE: &str = r#"{
  "GFDL-CM3": {
    "rcp60": {
      "2040_2049": {"tas": -2.5},
      "2050_2059": {"tas": -2.0},
      "2060_2069": {"tas": -1.5}
    }
  },
  "NCAR-CCSM4": {
    "rcp60": {"2040_2069": {"tas": -3.0}}
  }
}"#;

const DESIGN_FIXTURE: &str = r#"{
  "GFDL-CM3": {
    "2040-2069": {"di": 2437.4},
    "2070-2099": {"di": 1980.6}
  },
  "NCAR-CCSM4": {
    "2040-2069": {"di": 2555.0}
  }
}"#;

/// Serve canned bodies for the two endpoint paths on a loopback port.
/// Returns the base URL to point a client at. The listener thread lives for
/// the rest of the test process, one short-lived connection at a time.
fn spawn_stub(temperature_body: &'static str, design_body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let path = read_request_path(&mut stream);
            let (status, body) = if path.starts_with("/mmm/temperature/all/") {
                ("200 OK", temperature_body)
            } else if path.starts_with("/design_index/freezing/all/point/") {
                ("200 OK", design_body)
            } else {
                ("404 Not Found", "{}")
            };
            write_response(&mut stream, status, body);
        }
    });
    format!("http://{addr}")
}

fn read_request_path(stream: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !raw.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&raw)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_owned()
}

fn write_response(stream: &mut TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn fairbanks() -> GeoPoint {
    GeoPoint::new(64.8378, -147.7164).expect("Fairbanks is inside the bounding box")
}

fn client_for(base_url: &str) -> ClimateDataClient {
    ClimateDataClient::with_base_url(base_url).expect("client builds")
}

#[test]
fn test_temperature_mean_over_three_decades() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    let client = client_for(&base);

    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2040,
        2069,
    )
    .expect("valid query");
    let mat = client.fetch_mean_annual_temperature(query).expect("stub answers");
    // (-2.5 - 2.0 - 1.5) / 3 = -2.0 °C, converted and rounded
    assert_eq!(mat, 28.4);
}

#[test]
fn test_temperature_window_filters_before_averaging() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    let client = client_for(&base);

    // Only the 2040_2049 decade falls inside the window
    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2040,
        2049,
    )
    .expect("valid query");
    let mat = client.fetch_mean_annual_temperature(query).expect("stub answers");
    assert_eq!(mat, 27.5, "-2.5 °C converts to 27.5 °F exactly");
}

#[test]
fn test_temperature_selects_the_queried_model_branch() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    let client = client_for(&base);

    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::NcarCcsm4,
        Scenario::Rcp60,
        2040,
        2069,
    )
    .expect("valid query");
    let mat = client.fetch_mean_annual_temperature(query).expect("stub answers");
    assert_eq!(mat, 26.6, "-3.0 °C converts to 26.6 °F after rounding");
}

#[test]
fn test_missing_scenario_branch_is_a_remote_error() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    let client = client_for(&base);

    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp85,
        2040,
        2069,
    )
    .expect("valid query");
    let err = client.fetch_mean_annual_temperature(query).expect_err("rcp85 is absent");
    assert!(matches!(
        err,
        RemoteDataError::MissingKey { key } if key == "rcp85"
    ));
}

#[test]
fn test_empty_year_window_fails_fast() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    let client = client_for(&base);

    // Valid projection years, but the fixture has no samples there
    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2080,
        2090,
    )
    .expect("valid query");
    let err = client.fetch_mean_annual_temperature(query).expect_err("nothing to average");
    assert!(matches!(
        err,
        RemoteDataError::EmptyYearRange {
            start: 2080,
            end: 2090
        }
    ));
}

#[test]
fn test_unparseable_period_key_is_a_remote_error() {
    let historical = r#"{"GFDL-CM3": {"rcp60": {"historical": {"tas": -2.0}}}}"#;
    let base = spawn_stub(historical, DESIGN_FIXTURE);
    let client = client_for(&base);

    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2040,
        2069,
    )
    .expect("valid query");
    let err = client.fetch_mean_annual_temperature(query).expect_err("key has no year");
    assert!(matches!(
        err,
        RemoteDataError::PeriodKey { key } if key == "historical"
    ));
}

#[test]
fn test_design_index_passes_through_unrounded() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    let client = client_for(&base);

    let mid = DesignIndexQuery::new(fairbanks(), DesignIndexModel::GfdlCm3, Era::MidCentury);
    assert_eq!(client.fetch_design_freezing_index(mid).expect("stub answers"), 2437.4);

    let late = DesignIndexQuery::new(fairbanks(), DesignIndexModel::GfdlCm3, Era::LateCentury);
    assert_eq!(client.fetch_design_freezing_index(late).expect("stub answers"), 1980.6);
}

#[test]
fn test_missing_di_field_is_a_remote_error() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, r#"{"GFDL-CM3": {"2040-2069": {"units": 1}}}"#);
    let client = client_for(&base);

    let query = DesignIndexQuery::new(fairbanks(), DesignIndexModel::GfdlCm3, Era::MidCentury);
    let err = client.fetch_design_freezing_index(query).expect_err("di is absent");
    assert!(matches!(err, RemoteDataError::MissingKey { key } if key == "di"));
}

#[test]
fn test_non_numeric_di_is_a_remote_error() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, r#"{"GFDL-CM3": {"2040-2069": {"di": "n/a"}}}"#);
    let client = client_for(&base);

    let query = DesignIndexQuery::new(fairbanks(), DesignIndexModel::GfdlCm3, Era::MidCentury);
    let err = client.fetch_design_freezing_index(query).expect_err("di is a string");
    assert!(matches!(err, RemoteDataError::NonNumeric { key } if key == "di"));
}

#[test]
fn test_undecodable_body_is_a_json_error() {
    let base = spawn_stub("frost depth soon", DESIGN_FIXTURE);
    let client = client_for(&base);

    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2040,
        2069,
    )
    .expect("valid query");
    let err = client.fetch_mean_annual_temperature(query).expect_err("body is not JSON");
    assert!(matches!(err, RemoteDataError::Json(_)));

    // A decodable body with the wrong nesting fails the same way
    let shapeless = spawn_stub(r#"{"GFDL-CM3": 42}"#, DESIGN_FIXTURE);
    let client = client_for(&shapeless);
    let err = client.fetch_mean_annual_temperature(query).expect_err("branch is not nested");
    assert!(matches!(err, RemoteDataError::Json(_)));
}

#[test]
fn test_http_failure_surfaces_as_a_remote_error() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, DESIGN_FIXTURE);
    // Wrong prefix, so every request 404s
    let client = client_for(&format!("{base}/missing"));

    let query = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2040,
        2069,
    )
    .expect("valid query");
    let err = client.fetch_mean_annual_temperature(query).expect_err("stub 404s");
    assert!(matches!(err, RemoteDataError::Http(_)));
}

#[test]
fn test_estimate_combines_both_lookups() {
    let base = spawn_stub(TEMPERATURE_FIXTURE, r#"{"GFDL-CM3": {"2040-2069": {"di": 3000.0}}}"#);
    let client = client_for(&base);

    let temperature = TemperatureQuery::new(
        fairbanks(),
        ClimateModel::GfdlCm3,
        Scenario::Rcp60,
        2040,
        2069,
    )
    .expect("valid query");
    let design = DesignIndexQuery::new(fairbanks(), DesignIndexModel::GfdlCm3, Era::MidCentury);
    let soil = SoilProfile::new(100.0, 15.0, 0.78).expect("valid soil");
    let season = FreezeSeason::new(160, 0.75).expect("valid season");

    let result = estimate_frost_depth(&client, temperature, design, soil, season)
        .expect("both lookups succeed");
    // MAT 28.4 °F and nFI 2250 °F·days give a shallower freeze than the
    // 20 °F reference chain
    assert_eq!(result.depth_ft(), 5.9);
}
