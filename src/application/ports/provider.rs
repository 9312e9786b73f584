//! Notification provider port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationRequest;

/// Boxed cause kept for diagnostics
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The delivery mechanism cannot be reached on this platform. Not retried.
    #[error("Notification backend unavailable: {reason}")]
    BackendUnavailable {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Failed to show notification: {message}")]
    SendFailed {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl ProviderError {
    pub fn backend_unavailable(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn send_failed(message: impl Into<String>) -> Self {
        Self::SendFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause
    pub fn with_source(self, cause: impl Into<BoxError>) -> Self {
        match self {
            Self::BackendUnavailable { reason, .. } => Self::BackendUnavailable {
                reason,
                source: Some(cause.into()),
            },
            Self::SendFailed { message, .. } => Self::SendFailed {
                message,
                source: Some(cause.into()),
            },
        }
    }

    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }
}

/// Port for notification delivery.
///
/// Implement this to add a delivery channel; callers depend only on the
/// trait, so a new provider needs no changes elsewhere.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Deliver a notification.
    ///
    /// Must not return before the underlying facility has finished showing
    /// it, so the process can exit right after.
    ///
    /// # Returns
    /// Ok(true) when delivered
    async fn send(&self, request: &NotificationRequest) -> Result<bool, ProviderError>;
}

/// Blanket implementation for boxed provider types
#[async_trait]
impl NotificationProvider for Box<dyn NotificationProvider> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    async fn send(&self, request: &NotificationRequest) -> Result<bool, ProviderError> {
        self.as_ref().send(request).await
    }
}

/// Blanket implementation for shared provider types
#[async_trait]
impl NotificationProvider for Arc<dyn NotificationProvider> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    async fn send(&self, request: &NotificationRequest) -> Result<bool, ProviderError> {
        self.as_ref().send(request).await
    }
}
