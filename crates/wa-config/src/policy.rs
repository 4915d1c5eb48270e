//! Analysis policy: the constants that shape every analysis run.
//!
//! Defaults give the standard analysis. Two sigma multipliers
//! coexist and must not be conflated: `anomaly_sigma` drives the overall and
//! per-sample outlier thresholds, `hourly_sigma` drives hour-bin
//! classification.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validate::{ValidationError, ValidationResult};

/// How the engine treats the time ordering of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Assume the producer delivers samples in ascending time order.
    #[default]
    Trust,
    /// Reject sequences whose time of day goes backwards, allowing a single
    /// midnight rollover.
    Strict,
}

impl std::fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderingPolicy::Trust => write!(f, "trust"),
            OrderingPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for OrderingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trust" => Ok(OrderingPolicy::Trust),
            "strict" => Ok(OrderingPolicy::Strict),
            _ => Err(format!("unknown ordering policy: {}", s)),
        }
    }
}

/// Tunable constants for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPolicy {
    pub schema_version: String,

    /// Sigma multiplier for the upper/lower anomaly thresholds.
    pub anomaly_sigma: f64,

    /// Sigma multiplier for hour-bin HIGH/LOW classification.
    pub hourly_sigma: f64,

    /// Volatility (coefficient of variation, %) above which the window is UNSTABLE.
    pub unstable_volatility_pct: f64,

    /// Speed change between neighbours that still counts as stable.
    pub trend_step: f64,

    /// Temperature distance from the window mean for correlation tags.
    pub temperature_offset: f64,

    /// Fraction of the window maximum that counts as "near maximum".
    pub near_max_ratio: f64,

    pub ordering: OrderingPolicy,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            anomaly_sigma: 1.5,
            hourly_sigma: 1.0,
            unstable_volatility_pct: 30.0,
            trend_step: 1.0,
            temperature_offset: 2.0,
            near_max_ratio: 0.9,
            ordering: OrderingPolicy::Trust,
        }
    }
}

impl AnalysisPolicy {
    /// Parse a policy from JSON text. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json).map_err(|e| ValidationError::ParseError(e.to_string()))
    }

    /// Read and parse a policy file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }
}
