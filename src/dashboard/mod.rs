//! Live dashboard server.
//!
//! Serves the latest [`EnvironmentReport`](crate::scan::EnvironmentReport)
//! as an auto-refreshing page and as JSON:
//!
//! - `GET /` dashboard page
//! - `GET /api/report` current report
//! - `GET /health` liveness

pub mod app;
pub mod handlers;
pub mod rescan;

pub use app::{create_app, AppState, SharedReport};
pub use rescan::spawn_rescan;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::DashboardSettings;
use crate::error::{EnvSyncError, Result};
use crate::scan::EnvironmentReport;

/// Address the server binds to.
pub fn bind_address(settings: &DashboardSettings) -> String {
    format!("{}:{}", settings.host, settings.port)
}

/// Serve the dashboard until Ctrl-C.
///
/// `rescan` produces fresh reports; it is called every
/// `rescan_interval_secs` (never, when that is 0).
pub async fn serve<F>(
    initial: EnvironmentReport,
    settings: &DashboardSettings,
    rescan: F,
) -> Result<()>
where
    F: Fn() -> Result<EnvironmentReport> + Send + Sync + 'static,
{
    let report: SharedReport = Arc::new(RwLock::new(initial));
    let app = create_app(Arc::clone(&report), settings)?;

    let rescan_task = (settings.rescan_interval_secs > 0).then(|| {
        spawn_rescan(
            report,
            Duration::from_secs(settings.rescan_interval_secs),
            rescan,
        )
    });

    let addr = bind_address(settings);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EnvSyncError::Server(format!("cannot bind {}: {}", addr, e)))?;

    log_routes(&addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EnvSyncError::Server(e.to_string()));

    if let Some(task) = rescan_task {
        task.abort();
    }
    tracing::info!("Dashboard stopped");

    served
}

fn log_routes(addr: &str) {
    tracing::info!("Dashboard listening on http://{}", addr);
    tracing::debug!("  /            - Dashboard page");
    tracing::debug!("  /api/report  - Current report (JSON)");
    tracing::debug!("  /health      - Health check");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down dashboard");
}
