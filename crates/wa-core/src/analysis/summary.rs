//! Summary statistics and the thresholds derived from them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wa_common::OverallClassification;
use wa_config::AnalysisPolicy;
use wa_math::{coefficient_of_variation_pct, describe};

use super::AnalysisError;

/// Central tendency, dispersion, and outlier thresholds of one window.
///
/// Values keep full precision; rounding is left to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdSet {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample (n-1) standard deviation; 0 for a single sample.
    pub stddev: f64,
    /// `mean + anomaly_sigma * stddev`.
    pub upper: f64,
    /// `mean - anomaly_sigma * stddev`, floored at 0.
    pub lower: f64,
    /// Coefficient of variation in percent; 0 unless the mean is positive.
    pub volatility_pct: f64,
}

/// Summarize a non-empty speed series.
pub fn summarize(speeds: &[f64], policy: &AnalysisPolicy) -> Result<ThresholdSet, AnalysisError> {
    let d = describe(speeds).ok_or(AnalysisError::EmptyInput)?;
    let spread = policy.anomaly_sigma * d.std_dev;

    Ok(ThresholdSet {
        mean: d.mean,
        median: d.median,
        min: d.min,
        max: d.max,
        stddev: d.std_dev,
        upper: d.mean + spread,
        lower: (d.mean - spread).max(0.0),
        volatility_pct: coefficient_of_variation_pct(d.std_dev, d.mean),
    })
}

/// Classify the whole window. The first matching rule wins:
/// UNSTABLE, then HIGH, then LOW, otherwise NORMAL.
pub fn classify_overall(stats: &ThresholdSet, policy: &AnalysisPolicy) -> OverallClassification {
    if stats.volatility_pct > policy.unstable_volatility_pct {
        OverallClassification::Unstable
    } else if stats.max > stats.upper {
        OverallClassification::High
    } else if stats.min < stats.lower {
        OverallClassification::Low
    } else {
        OverallClassification::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [f64; 9] = [11.0, 11.0, 11.0, 13.0, 15.0, 22.0, 18.0, 14.0, 12.0];

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn fixture_thresholds() {
        let s = summarize(&FIXTURE, &AnalysisPolicy::default()).unwrap();
        assert!(approx(s.mean, 14.111, 1e-3));
        assert!(approx(s.stddev, 3.7565, 1e-3));
        assert!(approx(s.upper, 19.746, 1e-2));
        assert!(approx(s.lower, 8.476, 1e-2));
        assert!(approx(s.volatility_pct, 26.62, 1e-2));
        assert_eq!(s.median, 13.0);
        assert_eq!((s.min, s.max), (11.0, 22.0));
        assert_eq!(
            classify_overall(&s, &AnalysisPolicy::default()),
            OverallClassification::High
        );
    }

    #[test]
    fn empty_is_error() {
        let err = summarize(&[], &AnalysisPolicy::default()).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyInput);
    }

    #[test]
    fn single_sample_collapses_thresholds() {
        let s = summarize(&[7.0], &AnalysisPolicy::default()).unwrap();
        assert_eq!(s.stddev, 0.0);
        assert_eq!(s.upper, 7.0);
        assert_eq!(s.lower, 7.0);
        assert_eq!(
            classify_overall(&s, &AnalysisPolicy::default()),
            OverallClassification::Normal
        );
    }

    #[test]
    fn all_zero_speeds_have_no_volatility() {
        let s = summarize(&[0.0, 0.0, 0.0], &AnalysisPolicy::default()).unwrap();
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.volatility_pct, 0.0);
        assert_eq!(s.lower, 0.0);
    }

    #[test]
    fn lower_is_floored_at_zero() {
        let s = summarize(&[0.0, 1.0, 20.0], &AnalysisPolicy::default()).unwrap();
        assert_eq!(s.lower, 0.0);
    }

    #[test]
    fn unstable_preempts_high() {
        // cv far above 30% and max above upper at the same time
        let speeds = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 30.0];
        let policy = AnalysisPolicy::default();
        let s = summarize(&speeds, &policy).unwrap();
        assert!(s.max > s.upper);
        assert!(s.volatility_pct > 30.0);
        assert_eq!(classify_overall(&s, &policy), OverallClassification::Unstable);
    }

    #[test]
    fn low_when_only_minimum_is_outlying() {
        let speeds = [20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 14.0];
        let policy = AnalysisPolicy::default();
        let s = summarize(&speeds, &policy).unwrap();
        assert!(s.volatility_pct <= 30.0);
        assert!(s.max <= s.upper);
        assert_eq!(classify_overall(&s, &policy), OverallClassification::Low);
    }
}
