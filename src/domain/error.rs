//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error when a notification request or config value violates a field constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Timeout must be between {min} and {max} seconds, got {value}", min = crate::domain::notification::MIN_TIMEOUT_SECS, max = crate::domain::notification::MAX_TIMEOUT_SECS)]
    TimeoutOutOfRange { value: i64 },

    #[error("app_name must be a non-empty string")]
    EmptyAppName,

    #[error("app_name must be at most {max} characters, got {len}", max = crate::domain::config::MAX_APP_NAME_LEN)]
    AppNameTooLong { len: usize },

    #[error("Invalid version: \"{value}\". Expected MAJOR.MINOR.PATCH (e.g., 1.0.0)")]
    InvalidVersion { value: String },

    #[error("Invalid level: \"{value}\". Valid levels are: info, success, warning, error")]
    InvalidLevel { value: String },
}

/// Error when configuration cannot be loaded, validated or written
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file already exists at: {}", path.display())]
    AlreadyExists { path: PathBuf },
}

impl ConfigError {
    /// Path of the config file the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Invalid { path, .. }
            | Self::Write { path, .. }
            | Self::AlreadyExists { path } => path,
        }
    }
}
