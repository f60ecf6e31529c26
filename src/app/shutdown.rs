//! Shutdown signal handling

use tokio::signal;

/// Create a future that completes when a shutdown signal is received
///
/// Listens for Ctrl+C on every platform and additionally SIGTERM on unix.
/// Run uses this to decide when to stop serving; it can also be combined
/// with a custom serve loop.
///
/// # Example
///
/// ```rust,ignore
/// use plinth::app::shutdown_signal;
///
/// tokio::select! {
///     _ = shutdown_signal() => {
///         println!("Shutdown signal received");
///     }
///     _ = server.serve() => {}
/// }
/// ```
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
