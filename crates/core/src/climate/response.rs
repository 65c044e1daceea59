//! Decoding of SNAP Data API response documents
//!
//! Both endpoints return string-keyed JSON trees. The temperature endpoint
//! nests summary values under period keys that begin with a 4-digit year
//! (for example `2040_2069` or `2040_2049_tas`); this module flattens those
//! subtrees into year-tagged samples and reduces them to a mean over a
//! requested year window.

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::warn;

use super::RemoteDataError;

/// Both endpoints share three levels of string-keyed nesting:
/// model, then scenario or era, then period key (or summary field).
pub(crate) type NestedSummaries = FxHashMap<String, FxHashMap<String, FxHashMap<String, Value>>>;

/// Select one branch of a decoded document, failing with the key name.
pub(crate) fn lookup_branch<'doc, T>(
    branches: &'doc FxHashMap<String, T>,
    key: &str,
) -> Result<&'doc T, RemoteDataError> {
    branches.get(key).ok_or_else(|| RemoteDataError::MissingKey {
        key: key.to_owned(),
    })
}

/// Flatten the period subtrees of one model/scenario branch into
/// `(year, value)` samples.
///
/// The year of every sample is the leading segment of its top-level period
/// key; a key with no parseable leading year fails the whole decode, exactly
/// like a key the service never documents. Several period keys may share a
/// leading year (a decade summary and a 30-year summary both starting in
/// 2040), and each contributes its own samples. Non-numeric leaves carry no
/// temperature and are skipped.
pub(crate) fn flatten_period_samples(
    periods: &FxHashMap<String, Value>,
) -> Result<Vec<(i32, f64)>, RemoteDataError> {
    let mut samples = Vec::new();
    for (key, subtree) in periods {
        let leading = key.split_once('_').map_or(key.as_str(), |(year, _)| year);
        let year: i32 = leading
            .parse()
            .map_err(|_| RemoteDataError::PeriodKey { key: key.clone() })?;
        collect_numeric_leaves(year, subtree, &mut samples);
    }
    Ok(samples)
}

fn collect_numeric_leaves(year: i32, node: &Value, samples: &mut Vec<(i32, f64)>) {
    match node {
        Value::Object(children) => {
            for child in children.values() {
                collect_numeric_leaves(year, child, samples);
            }
        }
        leaf => {
            if let Some(value) = leaf.as_f64() {
                samples.push((year, value));
            } else {
                warn!("skipping non-numeric climate leaf under year {year}");
            }
        }
    }
}

/// Arithmetic mean of the samples whose year falls in `[start, end]`,
/// or `None` when the window matches nothing.
pub(crate) fn mean_over_years(samples: &[(i32, f64)], start: i32, end: i32) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for &(year, value) in samples {
        if (start..=end).contains(&year) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Projected temperatures arrive in °C; the formula chain runs in °F.
pub(crate) fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 1.8) + 32.0
}
