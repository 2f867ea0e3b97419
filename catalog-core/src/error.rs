//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Catalog Browser
//!
//! Every fallible operation in the crate returns `AppResult<T>`. The query
//! engine and the filter controller never surface these to the presentation
//! layer; storage and parse failures are logged and absorbed where they occur.

use std::{io, path::PathBuf};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Unified error type for catalog, storage and config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Durable preference store failure.
    #[error("Preference store error on key '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// Catalog could not be loaded or failed validation.
    #[error("Catalog error: {reason}")]
    Catalog { reason: String },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a preference store error
    pub fn storage<K: Into<String>, S: Into<String>>(key: K, reason: S) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a catalog validation error
    pub fn catalog<S: Into<String>>(reason: S) -> Self {
        Self::Catalog {
            reason: reason.into(),
        }
    }

    /// Storage failures degrade to "no persistence" and never stop the app.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Serde(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_are_recoverable() {
        let err = AppError::storage("marketplace-filters", "disk full");
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Preference store error on key 'marketplace-filters': disk full"
        );
    }

    #[test]
    fn catalog_errors_are_fatal() {
        let err = AppError::catalog("duplicate id 3");
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Catalog error: duplicate id 3");
    }
}
