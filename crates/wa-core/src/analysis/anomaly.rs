//! Per-sample outlier detection with heuristic cause tagging.
//!
//! Cause tags come from two ordered rule tables, one per anomaly class.
//! Every rule is evaluated independently and appends its tag when its
//! predicate holds; a class-specific fallback tag is used when none do.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wa_common::{AnomalyClass, Direction, Sample};
use wa_config::AnalysisPolicy;
use wa_math::{mean, percent_of_positive, round2, share_pct};

use super::summary::ThresholdSet;

/// Heuristic explanation attached to an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CauseTag {
    #[serde(rename = "sudden wind increase / atmospheric shift")]
    SuddenIncrease,
    #[serde(rename = "low temperature correlation")]
    LowTemperature,
    #[serde(rename = "near period maximum")]
    NearPeriodMaximum,
    #[serde(rename = "standard meteorological variation")]
    StandardVariation,
    #[serde(rename = "sudden calming")]
    SuddenCalming,
    #[serde(rename = "high temperature correlation")]
    HighTemperature,
    #[serde(rename = "wind calm")]
    WindCalm,
}

impl CauseTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CauseTag::SuddenIncrease => "sudden wind increase / atmospheric shift",
            CauseTag::LowTemperature => "low temperature correlation",
            CauseTag::NearPeriodMaximum => "near period maximum",
            CauseTag::StandardVariation => "standard meteorological variation",
            CauseTag::SuddenCalming => "sudden calming",
            CauseTag::HighTemperature => "high temperature correlation",
            CauseTag::WindCalm => "wind calm",
        }
    }
}

impl std::fmt::Display for CauseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a cause rule may look at.
struct RuleContext<'a> {
    sample: &'a Sample,
    previous: Option<&'a Sample>,
    stats: &'a ThresholdSet,
    mean_temperature: f64,
    policy: &'a AnalysisPolicy,
}

struct CauseRule {
    tag: CauseTag,
    applies: fn(&RuleContext<'_>) -> bool,
}

const HIGH_RULES: &[CauseRule] = &[
    CauseRule {
        tag: CauseTag::SuddenIncrease,
        applies: |ctx| ctx.previous.is_some_and(|p| p.speed < ctx.stats.mean),
    },
    CauseRule {
        tag: CauseTag::LowTemperature,
        applies: |ctx| {
            ctx.sample.temperature < ctx.mean_temperature - ctx.policy.temperature_offset
        },
    },
    CauseRule {
        tag: CauseTag::NearPeriodMaximum,
        applies: |ctx| ctx.sample.speed >= ctx.policy.near_max_ratio * ctx.stats.max,
    },
];

const LOW_RULES: &[CauseRule] = &[
    CauseRule {
        tag: CauseTag::SuddenCalming,
        applies: |ctx| ctx.previous.is_some_and(|p| p.speed > ctx.stats.mean),
    },
    CauseRule {
        tag: CauseTag::HighTemperature,
        applies: |ctx| {
            ctx.sample.temperature > ctx.mean_temperature + ctx.policy.temperature_offset
        },
    },
];

fn tag_causes(rules: &[CauseRule], fallback: CauseTag, ctx: &RuleContext<'_>) -> Vec<CauseTag> {
    let mut tags: Vec<CauseTag> = rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.tag)
        .collect();
    if tags.is_empty() {
        tags.push(fallback);
    }
    tags
}

/// One outlying sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnomalyRecord {
    /// Position of the sample in the input sequence.
    pub index: usize,
    pub time_label: String,
    pub speed: f64,
    #[schemars(with = "String")]
    pub direction: Direction,
    pub classification: AnomalyClass,
    /// Condition catalog code of the classification.
    pub code: u8,
    /// Distance from the mean as a percentage of the mean.
    /// `None` unless the mean is positive.
    pub deviation_pct: Option<f64>,
    /// Distance from the mean in speed units (always non-negative).
    pub delta_from_mean: f64,
    pub reasons: Vec<CauseTag>,
}

/// All anomalies of one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnomalySummary {
    pub count: usize,
    /// Share of samples flagged, in percent.
    pub ratio_pct: f64,
    pub records: Vec<AnomalyRecord>,
}

/// Flag samples outside the `[lower, upper]` band, in input order.
///
/// Low anomalies are only reported while `lower` is strictly positive; once
/// the lower threshold clamps to zero nothing can be "anomalously calm".
pub fn detect_anomalies(
    samples: &[Sample],
    stats: &ThresholdSet,
    policy: &AnalysisPolicy,
) -> AnomalySummary {
    let temperatures: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
    let mean_temperature = mean(&temperatures).unwrap_or(0.0);

    let records: Vec<AnomalyRecord> = samples
        .iter()
        .enumerate()
        .filter_map(|(index, sample)| {
            let ctx = RuleContext {
                sample,
                previous: index.checked_sub(1).map(|i| &samples[i]),
                stats,
                mean_temperature,
                policy,
            };
            if sample.speed > stats.upper {
                let delta = sample.speed - stats.mean;
                Some(record(
                    index,
                    sample,
                    AnomalyClass::AnomalyHigh,
                    delta,
                    stats.mean,
                    tag_causes(HIGH_RULES, CauseTag::StandardVariation, &ctx),
                ))
            } else if sample.speed < stats.lower && stats.lower > 0.0 {
                let delta = stats.mean - sample.speed;
                Some(record(
                    index,
                    sample,
                    AnomalyClass::AnomalyLow,
                    delta,
                    stats.mean,
                    tag_causes(LOW_RULES, CauseTag::WindCalm, &ctx),
                ))
            } else {
                None
            }
        })
        .collect();

    AnomalySummary {
        count: records.len(),
        ratio_pct: round2(share_pct(records.len(), samples.len())),
        records,
    }
}

fn record(
    index: usize,
    sample: &Sample,
    classification: AnomalyClass,
    delta: f64,
    mean: f64,
    reasons: Vec<CauseTag>,
) -> AnomalyRecord {
    AnomalyRecord {
        index,
        time_label: sample.time_label.clone(),
        speed: sample.speed,
        direction: sample.direction,
        classification,
        code: classification.condition().code(),
        deviation_pct: percent_of_positive(delta, mean).map(round2),
        delta_from_mean: round2(delta),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summary::summarize;

    fn series(speeds: &[f64], temps: &[f64]) -> Vec<Sample> {
        speeds
            .iter()
            .zip(temps)
            .enumerate()
            .map(|(i, (s, t))| Sample::hourly(i as u8, *s, "K", *t))
            .collect()
    }

    fn run(samples: &[Sample]) -> AnomalySummary {
        let policy = AnalysisPolicy::default();
        let speeds: Vec<f64> = samples.iter().map(|s| s.speed).collect();
        let stats = summarize(&speeds, &policy).unwrap();
        detect_anomalies(samples, &stats, &policy)
    }

    #[test]
    fn fixture_has_single_high_anomaly() {
        let samples = series(
            &[11.0, 11.0, 11.0, 13.0, 15.0, 22.0, 18.0, 14.0, 12.0],
            &[6.0, 7.0, 8.0, 9.0, 10.0, 9.0, 8.0, 7.0, 6.0],
        );
        let summary = run(&samples);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.ratio_pct, 11.11);

        let rec = &summary.records[0];
        assert_eq!(rec.index, 5);
        assert_eq!(rec.speed, 22.0);
        assert_eq!(rec.classification, AnomalyClass::AnomalyHigh);
        assert_eq!(rec.code, 3);
        assert_eq!(rec.deviation_pct, Some(55.91));
        assert_eq!(rec.delta_from_mean, 7.89);
        assert_eq!(rec.reasons, vec![CauseTag::NearPeriodMaximum]);
    }

    #[test]
    fn high_tags_accumulate_in_rule_order() {
        // previous below mean, cold, and at the maximum
        let samples = series(
            &[10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 30.0],
            &[10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 0.0],
        );
        let summary = run(&samples);
        assert_eq!(summary.count, 1);
        assert_eq!(
            summary.records[0].reasons,
            vec![
                CauseTag::SuddenIncrease,
                CauseTag::LowTemperature,
                CauseTag::NearPeriodMaximum
            ]
        );
    }

    #[test]
    fn first_sample_has_no_previous_rule() {
        let samples = series(
            &[30.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0],
            &[5.0; 9],
        );
        let summary = run(&samples);
        assert_eq!(summary.records[0].index, 0);
        assert_eq!(summary.records[0].reasons, vec![CauseTag::NearPeriodMaximum]);
    }

    #[test]
    fn low_anomaly_with_calming_and_heat() {
        let samples = series(
            &[20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 14.0],
            &[5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 25.0],
        );
        let summary = run(&samples);
        assert_eq!(summary.count, 1);
        let rec = &summary.records[0];
        assert_eq!(rec.classification, AnomalyClass::AnomalyLow);
        assert_eq!(rec.code, 4);
        assert_eq!(rec.delta_from_mean, 5.33);
        assert_eq!(rec.deviation_pct, Some(27.59));
        assert_eq!(
            rec.reasons,
            vec![CauseTag::SuddenCalming, CauseTag::HighTemperature]
        );
    }

    #[test]
    fn low_anomaly_fallback_is_wind_calm() {
        // previous sample is the calm one, so neither low rule fires
        let samples = series(
            &[20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 14.0, 14.0, 20.0, 20.0, 20.0],
            &[5.0; 12],
        );
        let summary = run(&samples);
        let second = summary
            .records
            .iter()
            .find(|r| r.index == 8)
            .expect("second calm sample flagged");
        assert_eq!(second.reasons, vec![CauseTag::WindCalm]);
    }

    #[test]
    fn low_detection_suppressed_when_lower_clamps() {
        let samples = series(&[0.0, 1.0, 20.0, 2.0], &[5.0; 4]);
        let summary = run(&samples);
        assert!(summary
            .records
            .iter()
            .all(|r| r.classification == AnomalyClass::AnomalyHigh));
    }

    #[test]
    fn zero_mean_leaves_deviation_undefined() {
        let mut speeds = vec![-1.0; 9];
        speeds.push(9.0);
        let samples = series(&speeds, &[5.0; 10]);
        let summary = run(&samples);
        assert_eq!(summary.count, 1);
        let rec = &summary.records[0];
        assert_eq!(rec.classification, AnomalyClass::AnomalyHigh);
        assert_eq!(rec.deviation_pct, None);
        assert_eq!(rec.delta_from_mean, 9.0);
    }

    #[test]
    fn negative_mean_leaves_deviation_undefined() {
        let mut speeds = vec![-5.0; 8];
        speeds.push(10.0);
        let summary = run(&series(&speeds, &[5.0; 9]));
        assert_eq!(summary.count, 1);
        let rec = &summary.records[0];
        assert_eq!(rec.classification, AnomalyClass::AnomalyHigh);
        assert_eq!(rec.deviation_pct, None);
        assert_eq!(rec.delta_from_mean, 13.33);
    }

    #[test]
    fn single_sample_has_no_anomalies() {
        let summary = run(&series(&[12.0], &[3.0]));
        assert_eq!(summary.count, 0);
        assert_eq!(summary.ratio_pct, 0.0);
    }

    #[test]
    fn tags_serialize_as_text() {
        let json = serde_json::to_string(&CauseTag::SuddenIncrease).unwrap();
        assert_eq!(json, "\"sudden wind increase / atmospheric shift\"");
        assert_eq!(CauseTag::WindCalm.to_string(), "wind calm");
    }
}
