//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod notify;
pub mod ports;
pub mod registry;

// Re-export use cases
pub use notify::{ErrorKind, NotifyError, NotifyInput, ShowNotificationUseCase};
pub use registry::ProviderRegistry;
