//! Exit codes for the wa-core CLI.
//!
//! Exit code ranges:
//! - 0-1: A report was produced (SUCCESS or FAILED)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal and I/O errors

use wa_common::{Error, ErrorCategory};

/// Exit codes for wa-core operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced with status SUCCESS
    Clean = 0,

    /// Report produced with status FAILED (e.g. no data)
    AnalysisFailed = 1,

    /// Invalid arguments
    ArgsError = 10,

    /// Policy file missing or invalid
    ConfigError = 11,

    /// Observation input could not be parsed
    InputError = 12,

    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if a report was produced (codes 0-1).
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }

    /// Check if this exit code indicates a successful analysis.
    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Check if this exit code indicates any error requiring attention.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::AnalysisFailed => "OK_FAILED_REPORT",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::InputError => "ERR_INPUT",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Exit code for a common error.
    pub fn for_error(err: &Error) -> Self {
        match (err, err.category()) {
            (Error::Io(_), _) => ExitCode::IoError,
            (_, ErrorCategory::Input) => ExitCode::InputError,
            (_, ErrorCategory::Config) => ExitCode::ConfigError,
            (_, ErrorCategory::Io) => ExitCode::InputError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
