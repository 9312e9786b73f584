//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The defaults if no file exists, otherwise the fully validated file
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Check the stored configuration without using it.
    ///
    /// # Returns
    /// Ok(false) if no file exists, Ok(true) if it is valid
    async fn validate(&self) -> Result<bool, ConfigError> {
        if !self.exists() {
            return Ok(false);
        }
        self.load().await.map(|_| true)
    }

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;

    /// Initialize configuration file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
