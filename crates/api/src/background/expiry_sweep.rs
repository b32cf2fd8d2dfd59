//! Periodic purge of expired scripts.
//!
//! Request-driven sweeps only run while clients keep submitting or deleting,
//! so an idle store would otherwise hold stale entries forever. This task
//! sweeps on a fixed interval using `tokio::time::interval`.

use std::sync::Arc;
use std::time::Duration;

use scriptbox_core::store::ScriptStore;
use tokio_util::sync::CancellationToken;

/// Run the expiry sweep loop until `cancel` is triggered.
pub async fn run(store: Arc<ScriptStore>, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Expiry sweep job started");

    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Expiry sweep job stopping");
                break;
            }
            _ = interval.tick() => {
                let removed = store.sweep_expired();
                if removed > 0 {
                    tracing::info!(removed, remaining = store.count(), "Expiry sweep: purged scripts");
                } else {
                    tracing::debug!("Expiry sweep: nothing to purge");
                }
            }
        }
    }
}
