//! Error types for autolink-rs
//!
//! This module defines custom error types using thiserror for better error handling.

use thiserror::Error;

/// Main error type for autolink-rs
#[derive(Error, Debug)]
pub enum AutolinkError {
    /// Matcher or linker configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unknown mention or hashtag service name
    #[error("Invalid {kind} service: {name}")]
    InvalidService { kind: &'static str, name: String },

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for autolink-rs
pub type Result<T> = std::result::Result<T, AutolinkError>;

impl AutolinkError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AutolinkError::ConfigError(msg.into())
    }

    /// Create an invalid service error
    pub fn invalid_service<S: Into<String>>(kind: &'static str, name: S) -> Self {
        AutolinkError::InvalidService {
            kind,
            name: name.into(),
        }
    }

    /// Whether this error was raised while validating configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            AutolinkError::ConfigError(_) | AutolinkError::InvalidService { .. }
        )
    }
}

/// Convert from anyhow::Error
impl From<anyhow::Error> for AutolinkError {
    fn from(err: anyhow::Error) -> Self {
        AutolinkError::Other(err.to_string())
    }
}
