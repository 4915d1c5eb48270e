//! JSON Schema generation for report output types.
//!
//! Consumers that render or store reports can validate against these
//! schemas instead of tracking the Rust types.
//!
//! # Usage
//!
//! ```bash
//! # List available schema types
//! wa-core schema --list
//!
//! # Generate schema for a specific type
//! wa-core schema Report
//!
//! # Generate all schemas
//! wa-core schema --all
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::analysis::{
    AnomalyRecord, AnomalySummary, CauseTag, DirectionBucket, DirectionSummary, HourBucket,
    ThresholdSet, TrendPeriod, TrendSummary,
};
pub use crate::report::{Report, ReportDetails, ReportStatus, Scope};
pub use wa_common::{
    AnomalyClass, Condition, ConditionInfo, HourClass, OverallClassification, Sample, TrendClass,
};

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        // Input
        ("Sample", "One wind observation"),
        // Report
        ("Report", "Complete diagnostic report for one window"),
        ("ReportStatus", "SUCCESS or FAILED"),
        ("ReportDetails", "Analysis results of a successful report"),
        ("Scope", "Sample count and time span of the window"),
        ("ThresholdSet", "Summary statistics and anomaly thresholds"),
        // Stages
        ("AnomalySummary", "Anomaly count, ratio, and records"),
        ("AnomalyRecord", "One outlying sample with cause tags"),
        ("CauseTag", "Heuristic cause of an anomaly"),
        ("TrendSummary", "Rising, falling, and stable periods"),
        ("TrendPeriod", "One run of a trend"),
        ("DirectionSummary", "Dominant direction and distribution"),
        ("DirectionBucket", "Count and share of one direction"),
        ("HourBucket", "Mean speed and classification of one hour"),
        // Catalog
        ("Condition", "Every condition a report can mention"),
        ("ConditionInfo", "Catalog entry with code, description, and color"),
        ("OverallClassification", "Whole-window classification"),
        ("AnomalyClass", "High or low anomaly"),
        ("TrendClass", "Rising, falling, or stable"),
        ("HourClass", "Hour-bin classification"),
    ]
}

/// Generate JSON Schema for a type by name.
///
/// Returns the schema as a serde_json::Value, or None if the type is unknown.
pub fn generate_schema(type_name: &str) -> Option<Value> {
    let schema = match type_name {
        "Sample" => schema_for!(Sample),
        "Report" => schema_for!(Report),
        "ReportStatus" => schema_for!(ReportStatus),
        "ReportDetails" => schema_for!(ReportDetails),
        "Scope" => schema_for!(Scope),
        "ThresholdSet" => schema_for!(ThresholdSet),
        "AnomalySummary" => schema_for!(AnomalySummary),
        "AnomalyRecord" => schema_for!(AnomalyRecord),
        "CauseTag" => schema_for!(CauseTag),
        "TrendSummary" => schema_for!(TrendSummary),
        "TrendPeriod" => schema_for!(TrendPeriod),
        "DirectionSummary" => schema_for!(DirectionSummary),
        "DirectionBucket" => schema_for!(DirectionBucket),
        "HourBucket" => schema_for!(HourBucket),
        "Condition" => schema_for!(Condition),
        "ConditionInfo" => schema_for!(ConditionInfo),
        "OverallClassification" => schema_for!(OverallClassification),
        "AnomalyClass" => schema_for!(AnomalyClass),
        "TrendClass" => schema_for!(TrendClass),
        "HourClass" => schema_for!(HourClass),
        _ => return None,
    };

    serde_json::to_value(schema).ok()
}

/// Generate all schemas as a map from type name to schema.
pub fn generate_all_schemas() -> BTreeMap<String, Value> {
    let mut schemas = BTreeMap::new();
    for (name, _desc) in available_schemas() {
        if let Some(schema) = generate_schema(name) {
            schemas.insert(name.to_string(), schema);
        }
    }
    schemas
}

/// Schema output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

/// Format a schema value for output.
pub fn format_schema(schema: &Value, format: SchemaFormat) -> serde_json::Result<String> {
    match format {
        SchemaFormat::Json => serde_json::to_string_pretty(schema),
        SchemaFormat::JsonCompact => serde_json::to_string(schema),
    }
}
