//! Error types for Wind Analysis.
//!
//! Every error carries a stable numeric code and a category so that callers
//! (the CLI, or a service embedding the engine) can branch without parsing
//! messages. None of these errors is fatal to the host process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Wind Analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The observation sequence itself is unusable.
    Input,
    /// Policy file errors.
    Config,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Wind Analysis.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (10-19)
    #[error("no data")]
    EmptyInput,

    #[error("unordered input at sample {index}: {current} follows {previous}")]
    UnorderedInput {
        index: usize,
        previous: String,
        current: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors (20-29)
    #[error("invalid policy file: {0}")]
    InvalidPolicy(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// - 10-19: Input errors
    /// - 20-29: Configuration errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::EmptyInput => 10,
            Error::UnorderedInput { .. } => 11,
            Error::InvalidInput(_) => 12,
            Error::InvalidPolicy(_) => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::EmptyInput | Error::UnorderedInput { .. } | Error::InvalidInput(_) => {
                ErrorCategory::Input
            }
            Error::InvalidPolicy(_) => ErrorCategory::Config,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::EmptyInput => "Supply at least one observation",
            Error::UnorderedInput { .. } => {
                "Sort observations by time, or analyze with ordering = \"trust\""
            }
            Error::InvalidInput(_) => "Check the observation file format",
            Error::InvalidPolicy(_) => "Run 'wa-core config show' to inspect the effective policy",
            Error::Io(_) => "Check that the file exists and is readable",
            Error::Json(_) => "Check that the file is valid JSON",
        }
    }
}
