//! JSON config store adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, RawConfig};
use crate::domain::error::ConfigError;

/// Config file location relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Config store reading a single JSON file.
///
/// A missing file means defaults. A present file must parse and validate
/// as a whole, otherwise loading fails with the file's path.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Create a store for the default path
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_PATH)
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate JSON content
    fn parse_json(path: &Path, content: &str) -> Result<AppConfig, ConfigError> {
        let raw: RawConfig = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        AppConfig::try_from(raw).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize AppConfig to pretty JSON
    fn to_json(config: &AppConfig) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&config.to_raw())
    }
}

impl Default for JsonConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConfigError::Read {
                path: self.path.clone(),
                source,
            })?;

        let config = Self::parse_json(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists {
                path: self.path.clone(),
            });
        }

        let write_error = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        let mut content =
            Self::to_json(&AppConfig::default()).map_err(|e| write_error(e.into()))?;
        content.push('\n');
        fs::write(&self.path, content).await.map_err(write_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ValidationError;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> JsonConfigStore {
        let path = dir.path().join("config.json");
        std::fs::write(&path, content).unwrap();
        JsonConfigStore::with_path(path)
    }

    #[test]
    fn default_path() {
        let store = JsonConfigStore::new();
        assert_eq!(store.path(), PathBuf::from("config/config.json"));
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::with_path(dir.path().join("nonexistent.json"));

        let config = store.load().await.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_config(&dir, r#"{"notification": {"timeout": 30}}"#);

        let config = store.load().await.unwrap();
        assert_eq!(config.notification().timeout().as_secs(), 30);
        assert_eq!(config.application().version(), "1.0.0");
    }

    #[tokio::test]
    async fn malformed_json_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_config(&dir, "{ invalid json }");

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), store.path());
        assert!(err.to_string().contains("config.json"));
    }

    #[tokio::test]
    async fn invalid_values_fail_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_config(
            &dir,
            r#"{"notification": {"app_name": "Builder", "timeout": 0}}"#,
        );

        let err = store.load().await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: ValidationError::TimeoutOutOfRange { value: 0 },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_config(&dir, r#"{"notification": {"timout": 30}}"#);

        assert!(matches!(
            store.load().await.unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[tokio::test]
    async fn directory_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::with_path(dir.path());

        assert!(matches!(
            store.load().await.unwrap_err(),
            ConfigError::Read { .. }
        ));
    }

    #[tokio::test]
    async fn validate_reports_missing_valid_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = JsonConfigStore::with_path(dir.path().join("missing.json"));
        assert!(!missing.validate().await.unwrap());

        let valid = write_config(&dir, r#"{"application": {"debug": true}}"#);
        assert!(valid.validate().await.unwrap());

        let invalid = write_config(&dir, r#"{"application": {"version": 123}}"#);
        assert!(invalid.validate().await.is_err());
    }

    #[tokio::test]
    async fn init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::with_path(dir.path().join("nested/config.json"));

        store.init().await.unwrap();
        assert!(store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::default());

        assert!(matches!(
            store.init().await.unwrap_err(),
            ConfigError::AlreadyExists { .. }
        ));
    }
}
