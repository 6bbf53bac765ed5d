//! Handlers for health check endpoints.

use axum::{Json, http::StatusCode};

use crate::api::dto::health::HealthResponse;

/// Liveness probe for container monitoring.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers `200 OK` with the plain-text body `OK`. The backend is not
/// contacted.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// JSON variant of [`health_handler`].
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// { "status": "OK" }
/// ```
pub async fn api_health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}
