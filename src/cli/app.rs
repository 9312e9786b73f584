//! Main app runner and exit code mapping

use std::future::Future;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{
    ErrorKind, NotifyError, NotifyInput, ProviderRegistry, ShowNotificationUseCase,
};
use crate::domain::config::{AppConfig, MAX_APP_NAME_LEN};
use crate::domain::error::ValidationError;
use crate::infrastructure::{create_provider, default_registry, JsonConfigStore};

use super::args::{Cli, Commands};
use super::config_cmd::handle_config_command;
use super::logging;
use super::presenter::Presenter;
use super::signals;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INTERRUPTED: u8 = 1;
pub const EXIT_BACKEND_UNAVAILABLE: u8 = 2;
pub const EXIT_CONFIG_ERROR: u8 = 3;
pub const EXIT_VALIDATION_ERROR: u8 = 4;

/// Exit code for a failure category
pub const fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Notification => EXIT_FAILURE,
        ErrorKind::BackendUnavailable => EXIT_BACKEND_UNAVAILABLE,
        ErrorKind::Configuration => EXIT_CONFIG_ERROR,
        ErrorKind::Validation => EXIT_VALIDATION_ERROR,
    }
}

/// Run the CLI with the platform's default providers.
/// Ctrl+C ends the run with [`EXIT_INTERRUPTED`].
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let work = execute(cli, &presenter, |app_name: &str| default_registry(app_name));

    ExitCode::from(until_interrupted(work, signals::interrupted(), &presenter).await)
}

/// Exit code of `work`, or [`EXIT_INTERRUPTED`] if `interrupt` fires first
async fn until_interrupted(
    work: impl Future<Output = u8>,
    interrupt: impl Future<Output = ()>,
    presenter: &Presenter,
) -> u8 {
    tokio::select! {
        code = work => code,
        () = interrupt => {
            tracing::warn!(exit_code = EXIT_INTERRUPTED, "cancelled by user");
            presenter.warn("Cancelled by user");
            EXIT_INTERRUPTED
        }
    }
}

/// Execute one invocation and return its exit code.
///
/// `registry_for` builds the provider registry from the resolved
/// application name.
pub async fn execute<F>(cli: Cli, presenter: &Presenter, registry_for: F) -> u8
where
    F: FnOnce(&str) -> ProviderRegistry,
{
    let store = JsonConfigStore::with_path(&cli.config);

    if let Some(Commands::Config { action }) = cli.command {
        logging::init(cli.verbose);
        return match handle_config_command(action, &store, presenter).await {
            Ok(code) => code,
            Err(e) => report(presenter, &e.into()),
        };
    }

    let config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            logging::init(cli.verbose);
            return report(presenter, &e.into());
        }
    };
    logging::init(cli.verbose || config.application().debug());

    tracing::info!(
        version = config.application().version(),
        config = %store.path().display(),
        "starting notification"
    );

    let app_name = match resolve_app_name(cli.app_name.as_deref(), &config) {
        Ok(name) => name,
        Err(e) => return report(presenter, &e.into()),
    };

    let provider = match cli.provider {
        Some(kind) => match create_provider(kind.into(), &app_name) {
            Ok(provider) => Some(provider),
            Err(e) => return report(presenter, &e.into()),
        },
        None => None,
    };

    let input = NotifyInput {
        title: cli.title.unwrap_or_default(),
        message: cli.message.unwrap_or_default(),
        level: cli.level.into(),
        timeout: cli
            .timeout
            .unwrap_or_else(|| i64::from(config.notification().timeout().as_secs())),
    };

    let registry = registry_for(&app_name);
    match ShowNotificationUseCase::new(&registry).execute(input, provider).await {
        Ok(_) => {
            tracing::info!("completed successfully");
            EXIT_SUCCESS
        }
        Err(e) => report(presenter, &e),
    }
}

/// CLI flag wins over config; the flag gets the same checks as the file
fn resolve_app_name(flag: Option<&str>, config: &AppConfig) -> Result<String, ValidationError> {
    let Some(name) = flag else {
        return Ok(config.notification().app_name().to_string());
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyAppName);
    }
    let len = name.chars().count();
    if len > MAX_APP_NAME_LEN {
        return Err(ValidationError::AppNameTooLong { len });
    }
    Ok(name.to_string())
}

/// Log and print a failure, returning its exit code
fn report(presenter: &Presenter, err: &NotifyError) -> u8 {
    let kind = err.kind();
    let code = exit_code(kind);
    tracing::error!(error = %err, kind = ?kind, exit_code = code, "notification failed");
    tracing::debug!(error = ?err, "error details");

    presenter.error(&err.to_string());
    match kind {
        ErrorKind::BackendUnavailable => {
            presenter.info("Check that a desktop notification service is running for this session")
        }
        ErrorKind::Configuration => {
            let hint = match err {
                NotifyError::Configuration(e) => {
                    format!("Check the syntax and values in {}", e.path().display())
                }
                _ => "Check the config file syntax and values".to_string(),
            };
            presenter.info(&hint);
        }
        ErrorKind::Validation => {
            presenter.info("Check title/message content and timeout range (1-300)")
        }
        ErrorKind::Notification => {}
    }

    code
}
