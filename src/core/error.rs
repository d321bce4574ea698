//! Error types and error handling for the site search aggregator.
//!
//! This module defines the error types used throughout the
//! library. A disabled or missing content module is never an
//! error; providers report it as an empty result set instead.

use thiserror::Error;

/// Result type alias for sitesearch operations
pub type Result<T> = std::result::Result<T, SiteSearchError>;

/// Main error type for the sitesearch library
#[derive(Error, Debug)]
pub enum SiteSearchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Provider '{provider}' failed: {message}")]
    ProviderFailed { provider: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SiteSearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SiteSearchError::InvalidQuery(_) | SiteSearchError::ConfigError(_)
        )
    }

    /// Check if this error came from a backing content store
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            SiteSearchError::StorageError(_)
                | SiteSearchError::IoError(_)
                | SiteSearchError::SerdeError(_)
        )
    }
}
