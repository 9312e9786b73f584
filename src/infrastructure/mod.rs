//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the platform notification service and the filesystem.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::JsonConfigStore;
pub use notification::{
    create_provider, default_registry, DesktopProvider, NotifySendProvider, ProviderKind,
};
