//! Resolve, read, and validate the effective analysis policy.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::policy::AnalysisPolicy;
use crate::resolve::{resolve_policy_path, ConfigSource};
use crate::validate::{validate_policy, ValidationError};

/// Errors that can occur while loading the policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Policy file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid policy {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Semantic validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

/// The effective policy with provenance information.
#[derive(Debug, Clone)]
pub struct LoadedPolicy {
    pub policy: AnalysisPolicy,
    /// File the policy came from (None when using defaults).
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Load the effective policy, falling back to builtin defaults.
pub fn load_policy(cli_path: Option<&Path>) -> Result<LoadedPolicy, ConfigError> {
    let (path, source) = resolve_policy_path(cli_path);

    let policy = match &path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound { path: p.clone() });
            }
            AnalysisPolicy::from_file(p).map_err(|source| ConfigError::Invalid {
                path: p.clone(),
                source,
            })?
        }
        None => AnalysisPolicy::default(),
    };

    validate_policy(&policy)?;

    Ok(LoadedPolicy {
        policy,
        path,
        source,
    })
}
