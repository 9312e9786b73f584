//! Interrupt handling

/// Resolves when the user interrupts the process (Ctrl+C).
///
/// If the handler cannot be installed this never resolves, so the
/// notification still runs to completion.
pub async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
