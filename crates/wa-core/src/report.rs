//! Report assembly.
//!
//! [`ReportAssembler`] runs every analysis stage over one sample sequence
//! and merges the results into an immutable [`Report`]. Failures never
//! escape as errors from [`ReportAssembler::assemble`]: they become a
//! report with `status = FAILED` and an error message.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wa_common::{OverallClassification, Sample, SCHEMA_VERSION};
use wa_config::{AnalysisPolicy, OrderingPolicy};

use crate::analysis::{
    check_ordering, classify_overall, detect_anomalies, direction_distribution, hourly_buckets,
    segment_trends, summarize, AnalysisError, AnomalySummary, DirectionSummary, HourBucket,
    ThresholdSet, TrendSummary,
};
use crate::clock::{Clock, SystemClock};
use crate::logging::{event_names, Stage};

/// Outcome of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Success,
    Failed,
}

/// The analyzed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scope {
    pub sample_count: usize,
    /// Label of the first sample.
    pub start_time: String,
    /// Label of the last sample.
    pub end_time: String,
}

/// Everything a successful run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportDetails {
    /// Condition catalog code of the overall classification.
    pub overall_code: u8,
    pub overall_description: String,
    pub scope: Scope,
    pub stats: ThresholdSet,
    pub direction: DirectionSummary,
    pub anomalies: AnomalySummary,
    pub trends: TrendSummary,
    pub hourly: Vec<HourBucket>,
}

/// The diagnostic report for one window of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub status: ReportStatus,
    /// `None` on failure.
    pub overall_classification: Option<OverallClassification>,
    /// Failure message; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Analysis results; absent on failure.
    #[serde(flatten)]
    pub details: Option<ReportDetails>,
}

impl Report {
    fn success(
        generated_at: DateTime<Utc>,
        overall: OverallClassification,
        details: ReportDetails,
    ) -> Self {
        Report {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at,
            status: ReportStatus::Success,
            overall_classification: Some(overall),
            error: None,
            details: Some(details),
        }
    }

    fn failed(generated_at: DateTime<Utc>, error: &AnalysisError) -> Self {
        Report {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at,
            status: ReportStatus::Failed,
            overall_classification: None,
            error: Some(error.to_string()),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReportStatus::Success
    }

    /// One-line human summary.
    pub fn summary_line(&self) -> String {
        let (Some(overall), Some(d)) = (self.overall_classification, &self.details) else {
            return format!(
                "FAILED: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        };
        format!(
            "{} ({}): {} samples {}-{}, mean {:.2}, max {:.2}, {} anomalies, {} trend periods, dominant {}",
            overall,
            d.overall_code,
            d.scope.sample_count,
            d.scope.start_time,
            d.scope.end_time,
            d.stats.mean,
            d.stats.max,
            d.anomalies.count,
            d.trends.total(),
            d.direction.dominant,
        )
    }
}

/// Runs the analysis stages and builds reports.
#[derive(Debug, Clone)]
pub struct ReportAssembler<C: Clock = SystemClock> {
    policy: AnalysisPolicy,
    clock: C,
}

impl ReportAssembler<SystemClock> {
    pub fn new(policy: AnalysisPolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }
}

impl<C: Clock> ReportAssembler<C> {
    pub fn with_clock(policy: AnalysisPolicy, clock: C) -> Self {
        Self { policy, clock }
    }

    pub fn policy(&self) -> &AnalysisPolicy {
        &self.policy
    }

    /// Analyze `samples`, reporting failures inside the returned report.
    pub fn assemble(&self, samples: &[Sample]) -> Report {
        let generated_at = self.clock.now();
        match self.analyze_window(samples) {
            Ok((overall, details)) => Report::success(generated_at, overall, details),
            Err(err) => {
                warn!(
                    target: "wa_core::analysis",
                    event = event_names::REPORT_FAILED,
                    stage = %Stage::Assemble,
                    error = %err,
                    "analysis failed"
                );
                Report::failed(generated_at, &err)
            }
        }
    }

    /// Analyze `samples`, returning the failure as an error instead.
    pub fn try_assemble(&self, samples: &[Sample]) -> Result<Report, AnalysisError> {
        let (overall, details) = self.analyze_window(samples)?;
        Ok(Report::success(self.clock.now(), overall, details))
    }

    fn analyze_window(
        &self,
        samples: &[Sample],
    ) -> Result<(OverallClassification, ReportDetails), AnalysisError> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AnalysisError::EmptyInput),
        };
        let policy = &self.policy;

        debug!(
            target: "wa_core::analysis",
            event = event_names::ANALYSIS_STARTED,
            stage = %Stage::Summarize,
            samples = samples.len(),
            ordering = %policy.ordering,
            "analysis started"
        );

        if policy.ordering == OrderingPolicy::Strict {
            check_ordering(samples)?;
        }

        let speeds: Vec<f64> = samples.iter().map(|s| s.speed).collect();
        let stats = summarize(&speeds, policy)?;
        let overall = classify_overall(&stats, policy);
        debug!(
            target: "wa_core::analysis",
            event = event_names::STATS_COMPUTED,
            stage = %Stage::Summarize,
            mean = stats.mean,
            stddev = stats.stddev,
            volatility_pct = stats.volatility_pct,
            overall = %overall,
            "summary statistics computed"
        );

        let anomalies = detect_anomalies(samples, &stats, policy);
        debug!(
            target: "wa_core::analysis",
            event = event_names::ANOMALIES_DETECTED,
            stage = %Stage::Detect,
            count = anomalies.count,
            "anomalies detected"
        );

        let hourly = hourly_buckets(samples, &stats, policy);
        debug!(
            target: "wa_core::analysis",
            event = event_names::HOURS_AGGREGATED,
            stage = %Stage::Aggregate,
            bins = hourly.len(),
            "hourly bins aggregated"
        );

        let trends = segment_trends(samples, policy);
        debug!(
            target: "wa_core::analysis",
            event = event_names::TRENDS_SEGMENTED,
            stage = %Stage::Segment,
            rising = trends.rising.len(),
            falling = trends.falling.len(),
            stable = trends.stable.len(),
            "trends segmented"
        );

        let direction = direction_distribution(samples).ok_or(AnalysisError::EmptyInput)?;
        debug!(
            target: "wa_core::analysis",
            event = event_names::DIRECTIONS_TABULATED,
            stage = %Stage::Distribute,
            dominant = %direction.dominant,
            distinct = direction.buckets.len(),
            "directions tabulated"
        );

        let condition = overall.condition();
        let details = ReportDetails {
            overall_code: condition.code(),
            overall_description: condition.description().to_string(),
            scope: Scope {
                sample_count: samples.len(),
                start_time: first.time_label.clone(),
                end_time: last.time_label.clone(),
            },
            stats,
            direction,
            anomalies,
            trends,
            hourly,
        };

        info!(
            target: "wa_core::analysis",
            event = event_names::REPORT_ASSEMBLED,
            stage = %Stage::Assemble,
            overall = %overall,
            samples = samples.len(),
            anomalies = details.anomalies.count,
            "report assembled"
        );

        Ok((overall, details))
    }
}

/// Analyze one window with an explicit policy and clock.
pub fn analyze(samples: &[Sample], policy: &AnalysisPolicy, clock: &impl Clock) -> Report {
    ReportAssembler::with_clock(policy.clone(), clock).assemble(samples)
}
