//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::app::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand, returning the exit code on success
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<u8, ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Check => handle_check(store, presenter).await,
        ConfigAction::Show => handle_show(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(EXIT_SUCCESS)
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<u8, ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(EXIT_SUCCESS)
}

async fn handle_check<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<u8, ConfigError> {
    if store.validate().await? {
        presenter.success(&format!("Config file is valid: {}", store.path().display()));
        Ok(EXIT_SUCCESS)
    } else {
        presenter.warn(&format!(
            "No config file at {}; built-in defaults are in effect",
            store.path().display()
        ));
        Ok(EXIT_CONFIG_ERROR)
    }
}

async fn handle_show<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<u8, ConfigError> {
    let config = store.load().await?;
    let source = if store.exists() {
        store.path().display().to_string()
    } else {
        "(defaults)".to_string()
    };

    presenter.key_value("source", &source);
    presenter.key_value("notification.app_name", config.notification().app_name());
    presenter.key_value(
        "notification.timeout",
        &config.notification().timeout().as_secs().to_string(),
    );
    presenter.key_value("application.version", config.application().version());
    presenter.key_value("application.debug", &config.application().debug().to_string());

    Ok(EXIT_SUCCESS)
}
