//! Wind Analysis Core Library
//!
//! This library turns an ordered sequence of wind observations into a
//! structured diagnostic report:
//! - Summary statistics and anomaly thresholds
//! - Per-sample anomaly detection with causal tagging
//! - Trend segmentation into rising, falling, and stable runs
//! - Directional distribution and hourly classification
//! - Report assembly behind an injectable clock
//!
//! The binary entry point is in `main.rs`.

pub mod analysis;
pub mod clock;
pub mod exit_codes;
pub mod logging;
pub mod report;
pub mod schema;

pub use clock::{Clock, FixedClock, SystemClock};
pub use report::{analyze, Report, ReportAssembler, ReportDetails, ReportStatus, Scope};
