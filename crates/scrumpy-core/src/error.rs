//! Core error types for scrumpy-core.
//!
//! The statistics engine itself never fails: missing annotations and
//! degenerate arithmetic are reported as data-quality problems. The errors
//! here cover the edges around it (input documents, configuration and the
//! per-board parameter store).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for scrumpy-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Parameter store errors
    #[error("Parameter store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a configuration value
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// The board does not have the pending / in-flight / done lists
    #[error("Board has {found} lists, at least 3 are required (pending, in-flight, done)")]
    TooFewLists { found: usize },

    /// Sprint duration outside 1..=MAX_DURATION weekdays
    #[error(
        "Sprint duration must be between 1 and {max} weekdays, got {0}",
        max = crate::sprint::MAX_DURATION
    )]
    InvalidDuration(u32),
}

/// Errors raised by the per-board parameter store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file exists but does not hold a board → parameters map
    #[error("Parameter store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the store file
    #[error("Failed to write parameter store to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
