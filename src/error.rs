//! Error types and handling for `SurfNotify`

use thiserror::Error;

/// Main error type for the `SurfNotify` crate
///
/// The scoring core never produces these; they come from the edges
/// (catalog and snapshot parsing, configuration, input validation).
#[derive(Error, Debug)]
pub enum SurfNotifyError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Spot catalog errors (malformed or inconsistent spot data)
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl SurfNotifyError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SurfNotifyError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SurfNotifyError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SurfNotifyError::Catalog { message } => {
                format!("The spot catalog could not be used: {message}")
            }
            SurfNotifyError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
            SurfNotifyError::Json { .. } => {
                "A data file is not valid JSON in the expected shape.".to_string()
            }
        }
    }
}
