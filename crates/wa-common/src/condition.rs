//! Condition catalog and classification vocabularies.
//!
//! The catalog is process-wide, read-only reference data: every classification
//! emitted in a report (overall, per-anomaly, per-trend, per-hour) maps to one
//! entry with a stable numeric code, a description, and a display color.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every condition a report can mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Normal,
    Low,
    High,
    AnomalyHigh,
    AnomalyLow,
    Unstable,
    TrendRising,
    TrendFalling,
    TrendStable,
}

/// Catalog entry for a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ConditionInfo {
    pub condition: Condition,
    /// Stable numeric code.
    pub code: u8,
    pub description: &'static str,
    /// Suggested display color for renderers.
    pub color: &'static str,
}

/// The full catalog, in code order. Indexed by `Condition as usize`.
pub static CONDITION_CATALOG: [ConditionInfo; 9] = [
    ConditionInfo {
        condition: Condition::Normal,
        code: 0,
        description: "Normal wind conditions",
        color: "green",
    },
    ConditionInfo {
        condition: Condition::Low,
        code: 1,
        description: "Wind below average",
        color: "blue",
    },
    ConditionInfo {
        condition: Condition::High,
        code: 2,
        description: "Wind above average",
        color: "yellow",
    },
    ConditionInfo {
        condition: Condition::AnomalyHigh,
        code: 3,
        description: "High wind anomaly",
        color: "red",
    },
    ConditionInfo {
        condition: Condition::AnomalyLow,
        code: 4,
        description: "Low wind anomaly",
        color: "cyan",
    },
    ConditionInfo {
        condition: Condition::Unstable,
        code: 5,
        description: "Unstable wind pattern",
        color: "magenta",
    },
    ConditionInfo {
        condition: Condition::TrendRising,
        code: 10,
        description: "Wind speed trending up",
        color: "bright_yellow",
    },
    ConditionInfo {
        condition: Condition::TrendFalling,
        code: 11,
        description: "Wind speed trending down",
        color: "bright_blue",
    },
    ConditionInfo {
        condition: Condition::TrendStable,
        code: 12,
        description: "Wind speed stable",
        color: "bright_green",
    },
];

impl Condition {
    /// Catalog entry for this condition.
    pub fn info(self) -> &'static ConditionInfo {
        &CONDITION_CATALOG[self as usize]
    }

    pub fn code(self) -> u8 {
        self.info().code
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// Look up a condition by its numeric code.
    pub fn from_code(code: u8) -> Option<Condition> {
        CONDITION_CATALOG
            .iter()
            .find(|info| info.code == code)
            .map(|info| info.condition)
    }

    /// Stable machine name (`ANOMALY_HIGH`).
    pub fn name(self) -> &'static str {
        match self {
            Condition::Normal => "NORMAL",
            Condition::Low => "LOW",
            Condition::High => "HIGH",
            Condition::AnomalyHigh => "ANOMALY_HIGH",
            Condition::AnomalyLow => "ANOMALY_LOW",
            Condition::Unstable => "UNSTABLE",
            Condition::TrendRising => "TREND_RISING",
            Condition::TrendFalling => "TREND_FALLING",
            Condition::TrendStable => "TREND_STABLE",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Whole-window classification, decided by precedence
/// UNSTABLE > HIGH > LOW > NORMAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallClassification {
    Normal,
    Low,
    High,
    Unstable,
}

impl OverallClassification {
    pub fn condition(self) -> Condition {
        match self {
            OverallClassification::Normal => Condition::Normal,
            OverallClassification::Low => Condition::Low,
            OverallClassification::High => Condition::High,
            OverallClassification::Unstable => Condition::Unstable,
        }
    }
}

impl std::fmt::Display for OverallClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.condition().name())
    }
}

/// Classification of a single outlying sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyClass {
    AnomalyHigh,
    AnomalyLow,
}

impl AnomalyClass {
    pub fn condition(self) -> Condition {
        match self {
            AnomalyClass::AnomalyHigh => Condition::AnomalyHigh,
            AnomalyClass::AnomalyLow => Condition::AnomalyLow,
        }
    }
}

/// Shape of a trend run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendClass {
    Rising,
    Falling,
    Stable,
}

impl TrendClass {
    pub fn condition(self) -> Condition {
        match self {
            TrendClass::Rising => Condition::TrendRising,
            TrendClass::Falling => Condition::TrendFalling,
            TrendClass::Stable => Condition::TrendStable,
        }
    }
}

/// Classification of one hour bin against the global mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HourClass {
    Normal,
    High,
    Low,
}

impl HourClass {
    pub fn condition(self) -> Condition {
        match self {
            HourClass::Normal => Condition::Normal,
            HourClass::High => Condition::High,
            HourClass::Low => Condition::Low,
        }
    }
}
