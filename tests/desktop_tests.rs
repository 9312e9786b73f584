//! Desktop provider failure tests
//!
//! Kept in their own test binary since they point the session bus
//! address at a socket that does not exist.

#![cfg(target_os = "linux")]

use std::error::Error as _;

use task_notify::application::ports::{NotificationProvider, ProviderError};
use task_notify::domain::NotificationRequest;
use task_notify::infrastructure::DesktopProvider;

#[tokio::test]
async fn unreachable_bus_keeps_underlying_cause() {
    let dir = tempfile::tempdir().unwrap();
    let address = format!("unix:path={}", dir.path().join("no-such-bus").display());
    std::env::set_var("DBUS_SESSION_BUS_ADDRESS", &address);

    let provider = DesktopProvider::new("TestApp").unwrap();
    let request = NotificationRequest::new("Build Status", "Tests passed!").unwrap();

    let err = provider.send(&request).await.unwrap_err();

    assert!(matches!(err, ProviderError::SendFailed { .. }), "got {err:?}");
    assert!(!err.is_backend_unavailable());
    let cause = err.source().expect("send failure should carry its cause");
    assert!(!cause.to_string().is_empty());
}
