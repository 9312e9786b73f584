//! task-notify - desktop notifications for automation hooks
//!
//! This crate shows a single desktop notification per invocation, typically
//! from a hook that fires when an AI coding agent finishes a task.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification request, level and timeout value objects, configuration, errors
//! - **Application**: The show-notification use case, provider registry and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, JSON config file)
//! - **CLI**: Command-line interface, argument parsing, exit codes and logging setup
//!
//! # Custom providers
//!
//! Implement [`application::ports::NotificationProvider`] and either pass it
//! per call to [`application::ShowNotificationUseCase::execute`] or install it
//! with [`application::ProviderRegistry::set_default`].

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
