//! Error types for envtier operations.
//!
//! This module defines [`EnvtierError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Parameter store failures are carried as [`StoreError`] and surfaced
//!   unchanged through [`EnvtierError::Store`]
//! - Use `EnvtierError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnvtierError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for envtier operations.
#[derive(Debug, Error)]
pub enum EnvtierError {
    /// The parameter store could not produce a value.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored value is not a recognized environment tier.
    #[error("Invalid environment '{value}' in parameter '{key}'")]
    InvalidEnvironment { value: String, key: String },

    /// Invalid or missing runtime settings.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Local parameter file not found.
    #[error("Parameter file not found: {path}")]
    ParamsFileNotFound { path: PathBuf },

    /// Failed to parse a local parameter file.
    #[error("Failed to parse parameter file at {path}: {message}")]
    ParamsFileParseError { path: PathBuf, message: String },

    /// A custom-resource event could not be decoded.
    #[error("Invalid event: {message}")]
    InvalidEvent { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failures reported by a parameter store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The parameter does not exist.
    #[error("Parameter '{key}' not found")]
    NotFound { key: String },

    /// The parameter exists but carries no value.
    #[error("Parameter '{key}' has no value")]
    MissingValue { key: String },

    /// The read did not complete within the configured timeout.
    #[error("Timed out after {timeout:?} reading parameter '{key}'")]
    Timeout { key: String, timeout: Duration },

    /// The store could not be reached or rejected the request.
    #[error("Failed to read parameter '{key}': {source}")]
    Unavailable {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result type alias for envtier operations.
pub type Result<T> = std::result::Result<T, EnvtierError>;
