//! Core error types for replan-core.
//!
//! The replan engine itself never fails; these errors cover the layers
//! around it: parsing wire values, validating user-entered blocks, and
//! loading or saving configuration and block files.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for replan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Time string is not a zero-padded 24-hour `HH:MM`
    #[error("Invalid time '{0}': expected HH:MM between 00:00 and 23:59")]
    InvalidTime(String),

    /// Required text field is blank
    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    /// Duration of zero minutes
    #[error("Block '{id}' has a zero duration")]
    ZeroDuration { id: String },

    /// Block runs past the end of the day
    #[error("Block '{id}' ends at minute {end}, past the end of the day")]
    PastEndOfDay { id: String, end: u32 },

    /// Fallback must be a genuine shrink
    #[error("Block '{id}' fallback ({fallback} min) must be shorter than its duration ({duration} min)")]
    FallbackTooLong {
        id: String,
        fallback: u32,
        duration: u32,
    },

    /// Priority ordinal outside 1..=3
    #[error("Invalid priority {0}: expected 1 (high), 2 (medium) or 3 (low)")]
    InvalidPriority(u8),

    /// Unknown category name
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Unknown replan mode name
    #[error("Unknown replan mode '{0}': expected keep-priorities, salvage-streak or hard-reset")]
    UnknownMode(String),

    /// Two blocks share an identifier
    #[error("Duplicate block id '{0}'")]
    DuplicateId(String),

    /// No block with the given identifier
    #[error("Block not found: {0}")]
    BlockNotFound(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
