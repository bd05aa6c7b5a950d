//! Graceful shutdown signal handling

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?
        .recv()
        .await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<(), ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for Ctrl+C or SIGTERM, then let in-flight requests finish within `grace`.
pub(crate) async fn listen(handle: ServerHandle, grace: Duration) -> Result<(), ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;
            info!("ctrl_c signal received");
        }
        result = terminate() => {
            result?;
            info!("terminate signal received");
        }
    };

    info!(grace_seconds = grace.as_secs(), "draining in-flight requests");

    handle.stop_graceful(Some(grace));

    Ok(())
}
