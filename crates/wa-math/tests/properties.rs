//! Property-based tests for wa-math descriptive statistics.
//!
//! Uses proptest to verify the ordering and guard invariants hold across many random inputs.

use proptest::prelude::*;
use wa_math::{
    coefficient_of_variation_pct, describe, extrema, mean, median, percent_of, round2,
    sample_std_dev, share_pct,
};

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-9;

fn speeds() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..150.0f64, 1..200)
}

// ============================================================================
// describe() properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// min <= mean <= max and min <= median <= max.
    #[test]
    fn central_values_within_extrema(values in speeds()) {
        let d = describe(&values).unwrap();
        prop_assert!(d.min <= d.mean + TOL, "min {} > mean {}", d.min, d.mean);
        prop_assert!(d.mean <= d.max + TOL, "mean {} > max {}", d.mean, d.max);
        prop_assert!(d.min <= d.median && d.median <= d.max);
    }

    /// Standard deviation is never negative.
    #[test]
    fn std_dev_non_negative(values in speeds()) {
        let sd = sample_std_dev(&values).unwrap();
        prop_assert!(sd >= 0.0);
    }

    /// A constant series has zero spread.
    #[test]
    fn constant_series_has_zero_std_dev(v in 0.0..100.0f64, n in 1usize..50) {
        let values = vec![v; n];
        let sd = sample_std_dev(&values).unwrap();
        prop_assert!(sd.abs() < TOL, "sd of constant series = {}", sd);
    }

    /// describe() agrees with the individual functions.
    #[test]
    fn describe_matches_components(values in speeds()) {
        let d = describe(&values).unwrap();
        prop_assert_eq!(d.mean, mean(&values).unwrap());
        prop_assert_eq!(d.median, median(&values).unwrap());
        prop_assert_eq!((d.min, d.max), extrema(&values).unwrap());
        prop_assert_eq!(d.count, values.len());
    }

    /// Shifting every value shifts the mean and leaves the spread alone.
    #[test]
    fn shift_invariance(values in speeds(), shift in -50.0..50.0f64) {
        let shifted: Vec<f64> = values.iter().map(|v| v + shift).collect();
        let a = describe(&values).unwrap();
        let b = describe(&shifted).unwrap();
        prop_assert!((b.mean - (a.mean + shift)).abs() < 1e-6);
        prop_assert!((b.std_dev - a.std_dev).abs() < 1e-6);
    }
}

// ============================================================================
// ratio guards
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Volatility is never negative and never non-finite.
    #[test]
    fn cv_non_negative(sd in 0.0..100.0f64, m in -100.0..100.0f64) {
        let cv = coefficient_of_variation_pct(sd, m);
        prop_assert!(cv >= 0.0 && cv.is_finite());
    }

    /// Division by zero never yields a value.
    #[test]
    fn percent_of_zero_is_none(n in -1e6..1e6f64) {
        prop_assert!(percent_of(n, 0.0).is_none());
    }

    /// Shares over a partition sum to ~100.
    #[test]
    fn shares_sum_to_hundred(counts in prop::collection::vec(1usize..40, 1..16)) {
        let total: usize = counts.iter().sum();
        let sum: f64 = counts.iter().map(|c| round2(share_pct(*c, total))).sum();
        prop_assert!((sum - 100.0).abs() <= 0.1, "sum of shares = {}", sum);
    }
}
