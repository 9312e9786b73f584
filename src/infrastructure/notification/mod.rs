//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or the notify-send binary as an alternate channel.

mod desktop;
mod notify_send;

pub use desktop::DesktopProvider;
pub use notify_send::NotifySendProvider;

use std::sync::Arc;

use crate::application::ports::{NotificationProvider, ProviderError};
use crate::application::ProviderRegistry;

/// Selectable delivery channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Desktop,
    NotifySend,
}

impl ProviderKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::NotifySend => "notify-send",
        }
    }
}

/// Create a provider of the given kind
pub fn create_provider(
    kind: ProviderKind,
    app_name: &str,
) -> Result<Arc<dyn NotificationProvider>, ProviderError> {
    tracing::debug!(provider = kind.as_str(), app_name, "creating provider");
    let provider: Arc<dyn NotificationProvider> = match kind {
        ProviderKind::Desktop => Arc::new(DesktopProvider::new(app_name)?),
        ProviderKind::NotifySend => Arc::new(NotifySendProvider::new(app_name)),
    };
    Ok(provider)
}

/// Registry whose built-in provider is the desktop provider for the current platform
pub fn default_registry(app_name: impl Into<String>) -> ProviderRegistry {
    let app_name = app_name.into();
    ProviderRegistry::with_builtin(move || create_provider(ProviderKind::Desktop, &app_name))
}
