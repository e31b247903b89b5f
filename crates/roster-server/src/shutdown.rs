//! Graceful shutdown coordination via `CancellationToken`.

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Signals the serve loop (and anything else holding a token) to stop.
pub struct ShutdownCoordinator {
    token: CancellationToken,
}

impl ShutdownCoordinator {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Get a clone of the cancellation token.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Initiate shutdown.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    /// Whether a shutdown has been initiated.
    pub fn is_shutting_down(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for Ctrl-C, then initiate shutdown.
    ///
    /// Returns early if shutdown was initiated some other way.
    pub async fn shutdown_on_ctrl_c(&self) {
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                if let Err(err) = res {
                    warn!(error = %err, "failed to listen for ctrl-c");
                    return;
                }
                info!("ctrl-c received, shutting down");
                self.shutdown();
            }
            () = self.token.cancelled() => {}
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
