//! Periodic Sweep Task
//!
//! Background task that periodically evicts aged store entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::shortener::{sweep, UrlStore};

/// Spawns a background task that periodically sweeps aged entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between passes. Each pass invokes the same [`sweep`] the cleanup
/// endpoint uses, with the same caller-supplied threshold; the sweep itself
/// never schedules anything.
///
/// # Arguments
/// * `store` - Shared reference to the URL store
/// * `sweep_interval_secs` - Interval in seconds between sweep passes
/// * `ttl` - Maximum entry age before eviction
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(
    store: Arc<RwLock<UrlStore>>,
    sweep_interval_secs: u64,
    ttl: Duration,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting sweep task with interval of {} seconds and ttl of {} seconds",
            sweep_interval_secs,
            ttl.as_secs()
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = sweep(&store, ttl).await;

            // Log sweep statistics
            if removed > 0 {
                info!("Sweep removed {} aged entries", removed);
            } else {
                debug!("Sweep found no aged entries");
            }
        }
    })
}
