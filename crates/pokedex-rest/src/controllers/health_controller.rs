//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use pokedex_service::HealthReport;

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}

/// Health check endpoint.
///
/// The cache is reported but never makes the service unhealthy.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Database and catalog file are reachable", body = HealthReport),
        (status = 503, description = "Database or catalog file unavailable", body = HealthReport)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = state.catalog_service.health().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
