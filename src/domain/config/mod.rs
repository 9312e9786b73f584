//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, ApplicationSettings, NotificationSettings, RawApplicationSettings, RawConfig,
    RawNotificationSettings, DEFAULT_APP_NAME, DEFAULT_VERSION, MAX_APP_NAME_LEN,
};
