//! Periodic rescans for the dashboard.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::Result;
use crate::scan::EnvironmentReport;

use super::app::SharedReport;

/// Replace the shared report with a fresh scan every `every`.
///
/// Scans are blocking and run on the blocking pool. A failed scan is
/// logged and the previous report stays in place.
pub fn spawn_rescan<F>(report: SharedReport, every: Duration, scan: F) -> JoinHandle<()>
where
    F: Fn() -> Result<EnvironmentReport> + Send + Sync + 'static,
{
    let scan = Arc::new(scan);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately and the initial report is
        // already in place.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let scan = Arc::clone(&scan);
            match tokio::task::spawn_blocking(move || scan()).await {
                Ok(Ok(fresh)) => {
                    tracing::debug!("Rescan found {} conflict(s)", fresh.conflicts.total());
                    *report.write().await = fresh;
                }
                Ok(Err(e)) => tracing::warn!("Rescan failed, keeping previous report: {}", e),
                Err(e) => tracing::warn!("Rescan task panicked: {}", e),
            }
        }
    })
}
