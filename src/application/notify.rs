//! Show notification use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::error::{ConfigError, ValidationError};
use crate::domain::notification::{NotificationLevel, NotificationRequest, DEFAULT_TIMEOUT_SECS};

use super::ports::{NotificationProvider, ProviderError};
use super::registry::ProviderRegistry;

/// Broad failure categories, one per exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    BackendUnavailable,
    Notification,
}

/// Any failure while configuring, building or delivering a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("Invalid notification: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Provider '{provider}' did not deliver the notification")]
    NotDelivered { provider: String },
}

impl NotifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Provider(e) if e.is_backend_unavailable() => ErrorKind::BackendUnavailable,
            Self::Provider(_) | Self::NotDelivered { .. } => ErrorKind::Notification,
        }
    }
}

/// Input parameters for the show notification use case
#[derive(Debug, Clone)]
pub struct NotifyInput {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
    /// Seconds; validated when the request is built
    pub timeout: i64,
}

impl NotifyInput {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NotificationLevel::default(),
            timeout: i64::from(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// One-shot notification use case
pub struct ShowNotificationUseCase<'a> {
    registry: &'a ProviderRegistry,
}

impl<'a> ShowNotificationUseCase<'a> {
    /// Create a new use case instance
    pub fn new(registry: &'a ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Validate the input and deliver it through exactly one provider.
    ///
    /// `provider` overrides the registry for this call only. There is no
    /// retry: the provider is called once whatever the outcome.
    pub async fn execute(
        &self,
        input: NotifyInput,
        provider: Option<Arc<dyn NotificationProvider>>,
    ) -> Result<NotificationRequest, NotifyError> {
        let request = NotificationRequest::builder(input.title, input.message)
            .level(input.level)
            .timeout(input.timeout)
            .build()?;

        let provider = self.registry.resolve(provider)?;

        tracing::debug!(
            provider = provider.name(),
            title = request.title(),
            level = %request.level(),
            timeout = %request.timeout(),
            "sending notification"
        );

        match provider.send(&request).await {
            Ok(true) => {
                tracing::info!(
                    provider = provider.name(),
                    title = request.title(),
                    "notification delivered"
                );
                Ok(request)
            }
            Ok(false) => Err(NotifyError::NotDelivered {
                provider: provider.name().to_string(),
            }),
            Err(e) => {
                tracing::debug!(provider = provider.name(), error = %e, "provider failed");
                Err(e.into())
            }
        }
    }
}
