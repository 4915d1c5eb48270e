//! Wind Analysis common types, catalog, and errors.
//!
//! This crate provides foundational types shared across the wa-* crates:
//! - Observation samples and the input wire formats
//! - Compass directions with an explicit unknown category
//! - The static condition catalog (codes, descriptions, colors)
//! - Common error types
//! - Output format specifications

pub mod condition;
pub mod direction;
pub mod error;
pub mod output;
pub mod sample;

pub use condition::{
    AnomalyClass, Condition, ConditionInfo, HourClass, OverallClassification, TrendClass,
    CONDITION_CATALOG,
};
pub use direction::Direction;
pub use error::{Error, ErrorCategory, Result};
pub use output::OutputFormat;
pub use sample::{parse_samples, Sample};

/// Schema version stamped on every report.
pub const SCHEMA_VERSION: &str = "1.0.0";
