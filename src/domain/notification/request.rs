//! Notification request value object

use crate::domain::error::ValidationError;

use super::level::NotificationLevel;
use super::timeout::{Timeout, DEFAULT_TIMEOUT_SECS};

/// A single validated notification.
///
/// Title and message are trimmed on construction and never empty. A request
/// that violates a constraint cannot be built, so every value of this type
/// is deliverable as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    title: String,
    message: String,
    level: NotificationLevel,
    timeout: Timeout,
}

impl NotificationRequest {
    /// Create a request with the default level and timeout
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder(title, message).build()
    }

    /// Start building a request with non-default level or timeout
    pub fn builder(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationRequestBuilder {
        NotificationRequestBuilder {
            title: title.into(),
            message: message.into(),
            level: NotificationLevel::default(),
            timeout: i64::from(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    pub fn timeout(&self) -> Timeout {
        self.timeout
    }
}

/// Builder for [`NotificationRequest`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct NotificationRequestBuilder {
    title: String,
    message: String,
    level: NotificationLevel,
    timeout: i64,
}

impl NotificationRequestBuilder {
    pub fn level(mut self, level: NotificationLevel) -> Self {
        self.level = level;
        self
    }

    /// Display timeout in seconds, checked against `[1, 300]` on build
    pub fn timeout(mut self, secs: i64) -> Self {
        self.timeout = secs;
        self
    }

    /// Validate every field and produce the request
    pub fn build(self) -> Result<NotificationRequest, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let timeout = Timeout::new(self.timeout)?;

        Ok(NotificationRequest {
            title: title.to_string(),
            message: message.to_string(),
            level: self.level,
            timeout,
        })
    }
}
