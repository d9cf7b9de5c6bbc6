use std::io;
use thiserror::Error;

/// Error type for memvitals health checks
#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Invalid tolerance configuration: {0}")]
    InvalidToleranceConfiguration(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid component name '{0}': the name must not contain ':'")]
    InvalidComponentName(String),

    #[error(
        "Invalid measurement: total memory must be > 0 and free memory must be >= 0 \
         (total={total_bytes}, free={free_bytes})"
    )]
    InvalidMeasurement { total_bytes: i64, free_bytes: i64 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for memvitals
pub type Result<T> = std::result::Result<T, HealthError>;

impl HealthError {
    /// Create an invalid tolerance error
    pub fn invalid_tolerance<S: Into<String>>(msg: S) -> Self {
        HealthError::InvalidToleranceConfiguration(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        HealthError::InvalidConfiguration(msg.into())
    }

    /// Create a config file error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HealthError::Config(msg.into())
    }
}
