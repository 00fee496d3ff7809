//! Error types for the estimator crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for estimator operations.
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Errors that can occur while preparing an estimate.
///
/// Estimation itself is total; these only arise from malformed input or
/// from loading a cost table off disk.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),

    #[error("Invalid {field} value: {value:?} is not a whole number")]
    InvalidCount { field: &'static str, value: String },

    #[error("Cost table validation failed: {0}")]
    InvalidTable(String),

    #[error("Unsupported cost table format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
