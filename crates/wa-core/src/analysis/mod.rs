//! The analysis stages.
//!
//! [`summary`] runs first and produces the [`ThresholdSet`] that
//! [`anomaly`] and [`hourly`] consume. [`trend`] and [`direction`] work
//! directly on the raw samples. None of the later stages depends on
//! another, and none of them keeps state between calls.

pub mod anomaly;
pub mod direction;
pub mod hourly;
pub mod ordering;
pub mod summary;
pub mod trend;

pub use anomaly::{detect_anomalies, AnomalyRecord, AnomalySummary, CauseTag};
pub use direction::{direction_distribution, DirectionBucket, DirectionSummary};
pub use hourly::{hourly_buckets, HourBucket};
pub use ordering::check_ordering;
pub use summary::{classify_overall, summarize, ThresholdSet};
pub use trend::{segment_trends, TrendPeriod, TrendSummary};

use thiserror::Error;

/// Reasons an analysis run cannot produce a successful report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no data")]
    EmptyInput,

    #[error("unordered input at sample {index}: {current} follows {previous}")]
    UnorderedInput {
        index: usize,
        previous: String,
        current: String,
    },
}

impl From<AnalysisError> for wa_common::Error {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput => wa_common::Error::EmptyInput,
            AnalysisError::UnorderedInput {
                index,
                previous,
                current,
            } => wa_common::Error::UnorderedInput {
                index,
                previous,
                current,
            },
        }
    }
}
