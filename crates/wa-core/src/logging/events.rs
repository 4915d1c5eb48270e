//! Structured event vocabulary for logging.
//!
//! Engine and CLI events carry an `event` name from [`event_names`] and a
//! [`Stage`] so that JSONL logs can be filtered without parsing messages.

use serde::{Deserialize, Serialize};

/// Stages of one wa-core invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Startup, logging and policy resolution.
    Init,
    /// Reading and parsing observations.
    Load,
    /// Summary statistics and thresholds.
    Summarize,
    /// Anomaly detection.
    Detect,
    /// Trend segmentation.
    Segment,
    /// Direction tabulation.
    Distribute,
    /// Hourly aggregation.
    Aggregate,
    /// Report assembly and output.
    Assemble,
    /// Process exit, whatever the command.
    Finish,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Load => "load",
            Stage::Summarize => "summarize",
            Stage::Detect => "detect",
            Stage::Segment => "segment",
            Stage::Distribute => "distribute",
            Stage::Aggregate => "aggregate",
            Stage::Assemble => "assemble",
            Stage::Finish => "finish",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used in logging.
pub mod event_names {
    // Run lifecycle
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FINISHED: &str = "run.finished";

    // Input
    pub const INPUT_LOADED: &str = "input.loaded";
    pub const INPUT_ERROR: &str = "input.error";

    // Analysis stages
    pub const ANALYSIS_STARTED: &str = "analysis.started";
    pub const STATS_COMPUTED: &str = "summarize.computed";
    pub const ANOMALIES_DETECTED: &str = "detect.finished";
    pub const TRENDS_SEGMENTED: &str = "segment.finished";
    pub const DIRECTIONS_TABULATED: &str = "distribute.finished";
    pub const HOURS_AGGREGATED: &str = "aggregate.finished";
    pub const REPORT_ASSEMBLED: &str = "report.assembled";
    pub const REPORT_FAILED: &str = "report.failed";

    // Config/init events
    pub const CONFIG_LOADED: &str = "config.loaded";
    pub const CONFIG_DEFAULT_USED: &str = "config.default_used";
    pub const CONFIG_ERROR: &str = "config.error";

    // Error events
    pub const INTERNAL_ERROR: &str = "internal_error";
}
