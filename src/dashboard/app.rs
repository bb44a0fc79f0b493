//! Dashboard router and shared state.
//!
//! The page is rendered once at startup; `/api/report` serves the report
//! the background rescan keeps current.

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::config::DashboardSettings;
use crate::error::Result;
use crate::report::templates::{render_html, DASHBOARD_HTML};
use crate::scan::EnvironmentReport;

use super::handlers;

/// Latest report, shared between the handlers and the rescan task.
pub type SharedReport = Arc<RwLock<EnvironmentReport>>;

#[derive(Clone)]
pub struct AppState {
    pub report: SharedReport,
    pub page: Arc<str>,
}

/// Render the dashboard page for the configured refresh interval.
pub fn render_page(settings: &DashboardSettings) -> Result<String> {
    render_html(
        DASHBOARD_HTML,
        &serde_json::json!({
            "refresh_ms": settings.refresh_interval_secs.saturating_mul(1000),
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn create_app(report: SharedReport, settings: &DashboardSettings) -> Result<Router> {
    let state = AppState {
        report,
        page: Arc::from(render_page(settings)?),
    };

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/api/report", get(handlers::api_report))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
