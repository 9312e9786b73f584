//! notify-send notification provider

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationProvider, ProviderError};
use crate::domain::notification::NotificationRequest;

/// Provider that shells out to the `notify-send` binary (libnotify)
#[derive(Debug)]
pub struct NotifySendProvider {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendProvider {
    /// Create a new notify-send provider
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Command-line arguments for one request
    fn args(&self, request: &NotificationRequest) -> Vec<String> {
        vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--icon".to_string(),
            request.level().icon_name().to_string(),
            "--urgency".to_string(),
            request.level().urgency().as_str().to_string(),
            "--expire-time".to_string(),
            request.timeout().as_millis().to_string(),
            "--".to_string(),
            request.title().to_string(),
            request.message().to_string(),
        ]
    }
}

#[async_trait]
impl NotificationProvider for NotifySendProvider {
    fn name(&self) -> &str {
        "notify-send"
    }

    async fn send(&self, request: &NotificationRequest) -> Result<bool, ProviderError> {
        let status = Command::new("notify-send")
            .args(self.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProviderError::backend_unavailable("notify-send not found").with_source(e)
                } else {
                    ProviderError::send_failed("could not run notify-send").with_source(e)
                }
            })?;

        if !status.success() {
            return Err(ProviderError::send_failed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(true)
    }
}
