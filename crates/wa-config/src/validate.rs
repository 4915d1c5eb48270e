//! Policy validation errors and semantic validation.

use thiserror::Error;

use crate::policy::AnalysisPolicy;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Policy validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn require_positive(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, format!("must be finite and > 0, got {}", value)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, format!("must be finite and >= 0, got {}", value)));
    }
    Ok(())
}

/// Validate an analysis policy semantically.
pub fn validate_policy(policy: &AnalysisPolicy) -> ValidationResult<()> {
    if policy.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: policy.schema_version.clone(),
        });
    }

    require_positive("anomaly_sigma", policy.anomaly_sigma)?;
    require_positive("hourly_sigma", policy.hourly_sigma)?;
    require_non_negative("unstable_volatility_pct", policy.unstable_volatility_pct)?;
    require_non_negative("trend_step", policy.trend_step)?;
    require_non_negative("temperature_offset", policy.temperature_offset)?;

    if !(policy.near_max_ratio > 0.0 && policy.near_max_ratio <= 1.0) {
        return Err(invalid(
            "near_max_ratio",
            format!("must be in (0, 1], got {}", policy.near_max_ratio),
        ));
    }

    Ok(())
}
