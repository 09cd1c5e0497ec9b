//! Error types for the redirector.

use thiserror::Error;

/// Result type alias for redirector operations.
pub type Result<T> = std::result::Result<T, RedirectError>;

/// Errors that can occur while building or serving redirect handlers.
#[derive(Error, Debug)]
pub enum RedirectError {
    /// Malformed YAML mapping
    #[error("Failed to parse YAML mapping: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed JSON mapping
    #[error("Failed to parse JSON mapping: {0}")]
    Json(#[from] serde_json::Error),

    /// Server configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server failed while running
    #[error("Server error: {0}")]
    Server(String),
}

impl RedirectError {
    /// Create a new configuration error.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new server error.
    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Whether the mapping data itself was malformed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, RedirectError::Yaml(_) | RedirectError::Json(_))
    }
}
