//! Cross-platform desktop notification provider using notify-rust
//!
//! Works on Windows, macOS, and Linux/BSD (freedesktop D-Bus).

use async_trait::async_trait;

use crate::application::ports::{NotificationProvider, ProviderError};
use crate::domain::notification::NotificationRequest;

/// Standard provider backed by the platform notification service
#[derive(Debug)]
pub struct DesktopProvider {
    /// Application name for notifications
    app_name: String,
}

impl DesktopProvider {
    /// Create a provider after checking the platform can show notifications
    pub fn new(app_name: impl Into<String>) -> Result<Self, ProviderError> {
        probe_backend()?;
        Ok(Self {
            app_name: app_name.into(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

#[async_trait]
impl NotificationProvider for DesktopProvider {
    fn name(&self) -> &str {
        "desktop"
    }

    async fn send(&self, request: &NotificationRequest) -> Result<bool, ProviderError> {
        let app_name = self.app_name.clone();
        let request = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || show(&app_name, &request))
            .await
            .map_err(|e| ProviderError::send_failed("notification task failed").with_source(e))??;

        Ok(true)
    }
}

fn show(app_name: &str, request: &NotificationRequest) -> Result<(), ProviderError> {
    let mut notification = notify_rust::Notification::new();
    notification
        .appname(app_name)
        .summary(request.title())
        .body(request.message())
        .icon(request.level().icon_name())
        .timeout(notify_rust::Timeout::Milliseconds(request.timeout().as_millis()));

    // Urgency hints only exist on freedesktop servers
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        use crate::domain::notification::Urgency;

        notification.urgency(match request.level().urgency() {
            Urgency::Critical => notify_rust::Urgency::Critical,
            Urgency::Normal => notify_rust::Urgency::Normal,
        });
    }

    notification
        .show()
        .map(|_| ())
        .map_err(|e| ProviderError::send_failed("could not show notification").with_source(e))
}

/// Freedesktop notifications go over the D-Bus session bus
#[cfg(all(unix, not(target_os = "macos")))]
fn probe_backend() -> Result<(), ProviderError> {
    use std::path::Path;

    if std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some_and(|addr| !addr.is_empty()) {
        return Ok(());
    }
    if let Some(runtime_dir) = std::env::var_os("XDG_RUNTIME_DIR") {
        if Path::new(&runtime_dir).join("bus").exists() {
            return Ok(());
        }
    }

    Err(ProviderError::backend_unavailable(
        "no D-Bus session bus (DBUS_SESSION_BUS_ADDRESS is unset and $XDG_RUNTIME_DIR/bus does not exist)",
    ))
}

#[cfg(any(target_os = "macos", windows))]
fn probe_backend() -> Result<(), ProviderError> {
    Ok(())
}

#[cfg(not(any(unix, windows)))]
fn probe_backend() -> Result<(), ProviderError> {
    Err(ProviderError::backend_unavailable(format!(
        "platform '{}' has no supported notification service",
        std::env::consts::OS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(target_os = "macos", windows))]
    fn provider_creates_successfully() {
        let provider = DesktopProvider::new("TestApp").unwrap();
        assert_eq!(provider.app_name(), "TestApp");
        assert_eq!(provider.name(), "desktop");
    }

    #[test]
    #[cfg(all(unix, not(target_os = "macos")))]
    fn probe_matches_session_bus_presence() {
        let has_address =
            std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some_and(|addr| !addr.is_empty());
        let has_socket = std::env::var_os("XDG_RUNTIME_DIR")
            .is_some_and(|dir| std::path::Path::new(&dir).join("bus").exists());

        let result = DesktopProvider::new("TestApp");
        if has_address || has_socket {
            assert_eq!(result.unwrap().app_name(), "TestApp");
        } else {
            assert!(result.unwrap_err().is_backend_unavailable());
        }
    }
}
