//! Guarded ratios and percentages.
//!
//! Dividing by a mean of zero is a real possibility for calm-wind windows,
//! so every division here has an explicit fallback instead of producing
//! inf/NaN.

/// `numerator / denominator`, or `None` when the denominator is zero or the
/// quotient is not finite.
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let q = numerator / denominator;
    q.is_finite().then_some(q)
}

/// `numerator / denominator * 100`, guarded like [`safe_ratio`].
pub fn percent_of(numerator: f64, denominator: f64) -> Option<f64> {
    safe_ratio(numerator, denominator).map(|r| r * 100.0)
}

/// `numerator` as a percentage of `base`, defined only for a strictly
/// positive base.
pub fn percent_of_positive(numerator: f64, base: f64) -> Option<f64> {
    if base > 0.0 {
        percent_of(numerator, base)
    } else {
        None
    }
}

/// Share of `count` in `total` as a percentage; 0 for an empty total.
pub fn share_pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Coefficient of variation (`std_dev / mean * 100`).
///
/// Returns 0 unless the mean is strictly positive.
pub fn coefficient_of_variation_pct(std_dev: f64, mean: f64) -> f64 {
    percent_of_positive(std_dev, mean).unwrap_or(0.0)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
