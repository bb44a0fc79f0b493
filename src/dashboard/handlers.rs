//! Route handlers for the dashboard page, the JSON report and health.

use axum::{
    extract::State,
    response::{Html, Json},
};
use serde_json::{json, Value};

use crate::scan::EnvironmentReport;

use super::app::AppState;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

pub async fn api_report(State(state): State<AppState>) -> Json<EnvironmentReport> {
    let report = state.report.read().await.clone();
    Json(report)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "envsync",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
