//! Fixed-decimal rounding applied between pipeline steps.
//!
//! The Modified Berggren chain rounds every intermediate quantity to a fixed
//! number of decimals before the next step consumes it. Rounding is never
//! deferred to the end of the pipeline: each call to [`round_to`] is one such
//! explicit step, and the call order matches the published formula chain.

/// Round `value` to `decimals` decimal places, halves away from zero.
///
/// Implemented as `f64::round` applied at a scaled decimal. An exactly
/// representable tie such as the literal `14.125` rounds up to `14.13`;
/// computed values that merely look like decimal ties (e.g.
/// `14.124999999999998`) round by their actual binary value.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
