//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;
use crate::domain::notification::{Timeout, DEFAULT_TIMEOUT_SECS};

/// Default application name shown by the notification backend
pub const DEFAULT_APP_NAME: &str = "Claude Code";

/// Default application version
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Longest accepted application name, in characters
pub const MAX_APP_NAME_LEN: usize = 100;

/// On-disk shape of the config file.
///
/// Every key is optional and falls back to its default. Unknown keys are
/// rejected. Values are not checked here; convert with
/// [`AppConfig::try_from`] to get a validated config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub notification: RawNotificationSettings,
    pub application: RawApplicationSettings,
}

/// `notification` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawNotificationSettings {
    pub app_name: String,
    pub timeout: i64,
}

impl Default for RawNotificationSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            timeout: i64::from(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// `application` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawApplicationSettings {
    pub version: String,
    pub debug: bool,
}

impl Default for RawApplicationSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            debug: false,
        }
    }
}

/// Validated notification settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    app_name: String,
    timeout: Timeout,
}

impl NotificationSettings {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn timeout(&self) -> Timeout {
        self.timeout
    }
}

/// Validated application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSettings {
    version: String,
    debug: bool,
}

impl ApplicationSettings {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// Application configuration.
/// Immutable; only obtainable from a fully validated [`RawConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    notification: NotificationSettings,
    application: ApplicationSettings,
}

impl AppConfig {
    pub fn notification(&self) -> &NotificationSettings {
        &self.notification
    }

    pub fn application(&self) -> &ApplicationSettings {
        &self.application
    }

    /// Convert back to the on-disk shape
    pub fn to_raw(&self) -> RawConfig {
        RawConfig {
            notification: RawNotificationSettings {
                app_name: self.notification.app_name.clone(),
                timeout: i64::from(self.notification.timeout.as_secs()),
            },
            application: RawApplicationSettings {
                version: self.application.version.clone(),
                debug: self.application.debug,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notification: NotificationSettings {
                app_name: DEFAULT_APP_NAME.to_string(),
                timeout: Timeout::default_timeout(),
            },
            application: ApplicationSettings {
                version: DEFAULT_VERSION.to_string(),
                debug: false,
            },
        }
    }
}

impl TryFrom<RawConfig> for AppConfig {
    type Error = ValidationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let app_name = raw.notification.app_name.trim();
        if app_name.is_empty() {
            return Err(ValidationError::EmptyAppName);
        }
        let len = app_name.chars().count();
        if len > MAX_APP_NAME_LEN {
            return Err(ValidationError::AppNameTooLong { len });
        }

        let timeout = Timeout::new(raw.notification.timeout)?;

        let version = raw.application.version.trim();
        if !is_semver(version) {
            return Err(ValidationError::InvalidVersion {
                value: raw.application.version.clone(),
            });
        }

        Ok(Self {
            notification: NotificationSettings {
                app_name: app_name.to_string(),
                timeout,
            },
            application: ApplicationSettings {
                version: version.to_string(),
                debug: raw.application.debug,
            },
        })
    }
}

/// `MAJOR.MINOR.PATCH`, each part one or more ASCII digits
fn is_semver(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}
