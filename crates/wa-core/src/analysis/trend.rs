//! Run-length trend segmentation of the speed series.
//!
//! A single left-to-right scan. Each run opens by comparing a sample with
//! its successor (a jump of more than `trend_step` opens a rising or
//! falling run, anything smaller opens a stable run) and then extends as
//! far as the run's continuation rule allows. The next run starts one past
//! the previous run's end, so no sample belongs to two runs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wa_common::{Sample, TrendClass};
use wa_config::AnalysisPolicy;
use wa_math::{mean, round2};

/// A maximal run of samples sharing one speed pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrendPeriod {
    pub start_index: usize,
    pub end_index: usize,
    pub start_time: String,
    pub end_time: String,
    pub start_speed: f64,
    pub end_speed: f64,
    /// `end_speed - start_speed`.
    pub delta: f64,
    /// Number of sample-to-sample steps spanned (`end_index - start_index`).
    pub duration_samples: usize,
    /// Mean speed over the run, both endpoints included.
    pub mean_speed: f64,
    pub classification: TrendClass,
    /// Condition catalog code of the classification.
    pub code: u8,
}

/// Trend periods grouped by classification, each group in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrendSummary {
    pub rising: Vec<TrendPeriod>,
    pub falling: Vec<TrendPeriod>,
    pub stable: Vec<TrendPeriod>,
}

impl TrendSummary {
    /// Total number of recorded periods.
    pub fn total(&self) -> usize {
        self.rising.len() + self.falling.len() + self.stable.len()
    }

    /// Every period, ordered by start index.
    pub fn chronological(&self) -> Vec<&TrendPeriod> {
        let mut all: Vec<&TrendPeriod> = self
            .rising
            .iter()
            .chain(&self.falling)
            .chain(&self.stable)
            .collect();
        all.sort_by_key(|p| p.start_index);
        all
    }

    fn push(&mut self, period: TrendPeriod) {
        match period.classification {
            TrendClass::Rising => self.rising.push(period),
            TrendClass::Falling => self.falling.push(period),
            TrendClass::Stable => self.stable.push(period),
        }
    }
}

fn opening_class(current: f64, next: f64, step: f64) -> TrendClass {
    if next > current + step {
        TrendClass::Rising
    } else if next < current - step {
        TrendClass::Falling
    } else {
        TrendClass::Stable
    }
}

fn continues(class: TrendClass, current: f64, next: f64, step: f64) -> bool {
    match class {
        TrendClass::Rising => next >= current,
        TrendClass::Falling => next <= current,
        TrendClass::Stable => (next - current).abs() <= step,
    }
}

/// Index of the last sample in the run that opens at `start`.
fn extend_run(speeds: &[f64], start: usize, class: TrendClass, step: f64) -> usize {
    let mut end = start;
    while end + 1 < speeds.len() && continues(class, speeds[end], speeds[end + 1], step) {
        end += 1;
    }
    end
}

/// Partition the samples into rising, falling, and stable runs.
///
/// Runs of a single sample (possible only with non-finite speeds) are
/// skipped.
pub fn segment_trends(samples: &[Sample], policy: &AnalysisPolicy) -> TrendSummary {
    let speeds: Vec<f64> = samples.iter().map(|s| s.speed).collect();
    let step = policy.trend_step;
    let mut summary = TrendSummary::default();

    let mut start = 0;
    while start + 1 < speeds.len() {
        let class = opening_class(speeds[start], speeds[start + 1], step);
        let end = extend_run(&speeds, start, class, step);
        if end > start {
            summary.push(period(samples, &speeds, start, end, class));
        }
        start = end + 1;
    }

    summary
}

fn period(
    samples: &[Sample],
    speeds: &[f64],
    start: usize,
    end: usize,
    class: TrendClass,
) -> TrendPeriod {
    let run = &speeds[start..=end];
    TrendPeriod {
        start_index: start,
        end_index: end,
        start_time: samples[start].time_label.clone(),
        end_time: samples[end].time_label.clone(),
        start_speed: speeds[start],
        end_speed: speeds[end],
        delta: round2(speeds[end] - speeds[start]),
        duration_samples: end - start,
        mean_speed: round2(mean(run).unwrap_or(speeds[start])),
        classification: class,
        code: class.condition().code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(speeds: &[f64]) -> Vec<Sample> {
        speeds
            .iter()
            .enumerate()
            .map(|(i, s)| Sample::hourly(i as u8, *s, "G", 10.0))
            .collect()
    }

    fn segment(speeds: &[f64]) -> TrendSummary {
        segment_trends(&series(speeds), &AnalysisPolicy::default())
    }

    #[test]
    fn fixture_has_three_runs() {
        let t = segment(&[11.0, 11.0, 11.0, 13.0, 15.0, 22.0, 18.0, 14.0, 12.0]);
        assert_eq!(t.total(), 3);

        let stable = &t.stable[0];
        assert_eq!((stable.start_index, stable.end_index), (0, 2));
        assert_eq!((stable.start_speed, stable.end_speed), (11.0, 11.0));
        assert_eq!(stable.code, 12);

        let rising = &t.rising[0];
        assert_eq!((rising.start_index, rising.end_index), (3, 5));
        assert_eq!(rising.delta, 9.0);
        assert_eq!(rising.duration_samples, 2);
        assert_eq!(rising.mean_speed, 16.67);
        assert_eq!(rising.start_time, "03:00");
        assert_eq!(rising.end_time, "05:00");

        let falling = &t.falling[0];
        assert_eq!((falling.start_index, falling.end_index), (6, 8));
        assert_eq!(falling.delta, -6.0);
        assert_eq!(falling.mean_speed, 14.67);
    }

    #[test]
    fn rising_run_tolerates_flat_steps() {
        let t = segment(&[5.0, 8.0, 8.0, 9.0, 4.0]);
        assert_eq!(t.rising.len(), 1);
        assert_eq!(t.rising[0].end_index, 3);
        // the lone trailing sample forms no period
        assert_eq!(t.total(), 1);
    }

    #[test]
    fn stable_run_uses_step_tolerance() {
        let t = segment(&[10.0, 11.0, 10.0, 11.0, 12.0]);
        assert_eq!(t.stable.len(), 1);
        assert_eq!(t.stable[0].end_index, 4);
    }

    #[test]
    fn next_run_starts_past_previous_end() {
        // 0..=1 rising (5 -> 9, then 9 -> 3 breaks), next run opens at 2
        let t = segment(&[5.0, 9.0, 3.0, 3.0]);
        assert_eq!(t.rising[0].end_index, 1);
        assert_eq!(t.stable[0].start_index, 2);
        assert!(t.falling.is_empty());
    }

    #[test]
    fn short_series() {
        assert_eq!(segment(&[]).total(), 0);
        assert_eq!(segment(&[4.0]).total(), 0);
        assert_eq!(segment(&[4.0, 4.5]).stable.len(), 1);
    }

    #[test]
    fn nan_speeds_produce_no_single_sample_runs() {
        let t = segment(&[f64::NAN, f64::NAN, 3.0, 3.0]);
        for p in t.chronological() {
            assert!(p.end_index > p.start_index);
        }
        assert_eq!(t.stable.len(), 1);
        assert_eq!(t.stable[0].start_index, 2);
    }

    #[test]
    fn chronological_merges_groups() {
        let t = segment(&[11.0, 11.0, 11.0, 13.0, 15.0, 22.0, 18.0, 14.0, 12.0]);
        let starts: Vec<usize> = t.chronological().iter().map(|p| p.start_index).collect();
        assert_eq!(starts, vec![0, 3, 6]);
    }

    #[test]
    fn custom_step() {
        let policy = AnalysisPolicy {
            trend_step: 3.0,
            ..AnalysisPolicy::default()
        };
        let t = segment_trends(&series(&[10.0, 12.0, 14.0, 16.0]), &policy);
        assert_eq!(t.stable.len(), 1);
        assert_eq!(t.stable[0].end_index, 3);
    }
}
