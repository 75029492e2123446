//! Error types for the application shell
//!
//! The engine never fails; these cover configuration, terminal I/O,
//! logging setup and output serialization.

use thiserror::Error;

/// Result type for application operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur outside the engine
#[derive(Debug, Error)]
pub enum CalcError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or written
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Snapshot could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a telemetry error
    #[must_use]
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry {
            message: message.into(),
        }
    }
}
