//! Error types for fontsync-core

use thiserror::Error;

/// Result type alias using fontsync-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for fontsync
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source folder does not exist under any mounted root
    #[error("Font source folder not found on any mounted drive: {relative}")]
    SourceNotFound { relative: String },

    /// The source tree could not be enumerated
    #[error("Failed to scan font source {path}: {message}")]
    Scan { path: String, message: String },

    /// Reading or writing the font ledger failed
    #[error("Font ledger error: {message}")]
    Ledger { message: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a source not found error
    pub fn source_not_found(relative: impl Into<String>) -> Self {
        Self::SourceNotFound {
            relative: relative.into(),
        }
    }

    /// Create a scan error
    pub fn scan(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Scan {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a ledger error
    pub fn ledger(message: impl Into<String>) -> Self {
        Self::Ledger {
            message: message.into(),
        }
    }

    /// Whether this error prevents the run from starting at all.
    ///
    /// Configuration problems are reported with a distinct exit status from
    /// failures that happen once a run is under way.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::InvalidConfig { .. } | Self::YamlParse(_)
        )
    }
}
