//! Descriptive statistics over finite, in-memory slices.
//!
//! Every function returns `None` for empty input instead of NaN so that
//! callers are forced to handle the degenerate case explicitly.

use serde::Serialize;

/// Central tendency and dispersion of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Descriptive {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample (n-1) standard deviation; 0 for a single value.
    pub std_dev: f64,
}

/// Compute all descriptive statistics in one call.
///
/// Returns `None` when `values` is empty.
pub fn describe(values: &[f64]) -> Option<Descriptive> {
    let mean = mean(values)?;
    let median = median(values)?;
    let (min, max) = extrema(values)?;
    let std_dev = sample_std_dev_with_mean(values, mean)?;
    Some(Descriptive {
        count: values.len(),
        mean,
        median,
        min,
        max,
        std_dev,
    })
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; the average of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Minimum and maximum in one pass.
pub fn extrema(values: &[f64]) -> Option<(f64, f64)> {
    let (first, rest) = values.split_first()?;
    let bounds = rest
        .iter()
        .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    Some(bounds)
}

/// Sample standard deviation (n-1 denominator).
///
/// Defined as 0 for a single value rather than undefined.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    sample_std_dev_with_mean(values, mean)
}

fn sample_std_dev_with_mean(values: &[f64], mean: f64) -> Option<f64> {
    match values.len() {
        0 => None,
        1 => Some(0.0),
        n => {
            let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            Some((sum_sq / (n - 1) as f64).sqrt())
        }
    }
}
