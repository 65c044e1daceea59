//! Validated value records for a single frost-depth computation
//!
//! Every record here is immutable, `Copy`, and built through a constructor
//! that rejects out-of-domain values with [`InputRangeError`]. The numeric
//! pipeline never re-validates: a record that exists is a record that passed
//! its domain check.

pub mod geo;
pub mod season;
pub mod soil;

pub use geo::GeoPoint;
pub use season::FreezeSeason;
pub use soil::SoilProfile;

use thiserror::Error;

/// A caller-supplied value outside its documented domain.
///
/// Raised by the validated constructors in this module and by the selector
/// parsers in the climate module, always before any network call or formula
/// evaluation happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputRangeError {
    /// A scalar outside its closed or half-open numeric domain.
    #[error("{field} = {value} is outside the valid range {range}")]
    OutOfRange {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable domain, including units.
        range: &'static str,
    },

    /// A selector string not in the enumerated vocabulary.
    #[error("unknown {kind} \"{value}\", expected one of: {expected}")]
    UnknownSelector {
        /// Selector family (climate model, emissions scenario, ...).
        kind: &'static str,
        /// The rejected spelling.
        value: String,
        /// The accepted spellings.
        expected: &'static str,
    },

    /// A projection year interval whose start lies after its end.
    #[error("year range {start}..={end} is inverted")]
    InvertedYearRange {
        /// Requested first year.
        start: i32,
        /// Requested last year.
        end: i32,
    },
}
