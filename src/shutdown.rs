use tokio::sync::watch;
use tracing::{info, warn};

/// Turns Ctrl-C into a flag the foreground loops can select on
pub struct ShutdownCoordinator {
    requested: watch::Receiver<bool>,
}

impl ShutdownCoordinator {
    /// Install the Ctrl-C handler on the current runtime
    pub fn install() -> Self {
        let (tx, rx) = watch::channel(false);

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, shutting down");
                    let _ = tx.send(true);
                }
                Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
            }
        });

        Self { requested: rx }
    }

    /// Resolve once shutdown has been requested. Never resolves if the
    /// signal handler could not be installed.
    pub async fn wait(&mut self) {
        if self.requested.wait_for(|requested| *requested).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
