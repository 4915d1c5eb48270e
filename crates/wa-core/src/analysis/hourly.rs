//! Hour-bin aggregation.
//!
//! Only contiguous samples sharing an hour are merged. The same hour can
//! therefore appear in several bins when the input is not time-ordered.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wa_common::{HourClass, Sample};
use wa_config::AnalysisPolicy;
use wa_math::{mean, round2};

use super::summary::ThresholdSet;

/// Mean speed and classification of one contiguous hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HourBucket {
    pub hour: u8,
    /// `HH:00`.
    pub hour_label: String,
    pub mean_speed: f64,
    pub classification: HourClass,
    /// Condition catalog code of the classification.
    pub code: u8,
    pub sample_count: usize,
}

/// Bin contiguous same-hour samples and classify each bin against
/// `mean ± hourly_sigma * stddev` of the whole window.
pub fn hourly_buckets(
    samples: &[Sample],
    stats: &ThresholdSet,
    policy: &AnalysisPolicy,
) -> Vec<HourBucket> {
    let spread = policy.hourly_sigma * stats.stddev;
    let high = stats.mean + spread;
    let low = stats.mean - spread;

    samples
        .chunk_by(|a, b| a.hour == b.hour)
        .map(|bin| {
            let speeds: Vec<f64> = bin.iter().map(|s| s.speed).collect();
            let bin_mean = mean(&speeds).unwrap_or(0.0);
            let classification = if bin_mean > high {
                HourClass::High
            } else if bin_mean < low {
                HourClass::Low
            } else {
                HourClass::Normal
            };
            let hour = bin[0].hour;
            HourBucket {
                hour,
                hour_label: format!("{:02}:00", hour),
                mean_speed: round2(bin_mean),
                classification,
                code: classification.condition().code(),
                sample_count: bin.len(),
            }
        })
        .collect()
}
