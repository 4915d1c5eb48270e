//! Wind Analysis policy loading and validation.
//!
//! This crate provides:
//! - The typed `AnalysisPolicy` (every tunable constant of the engine)
//! - Policy path resolution (CLI → env → config dir → XDG → defaults)
//! - Semantic validation

pub mod load;
pub mod policy;
pub mod resolve;
pub mod validate;

pub use load::{load_policy, ConfigError, LoadedPolicy};
pub use policy::{AnalysisPolicy, OrderingPolicy};
pub use resolve::{resolve_policy_path, ConfigSource};
pub use validate::{validate_policy, ValidationError, ValidationResult};

/// Schema version for policy files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
