use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Liveness probe served on `GET /`.
pub async fn api_status() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "API is working" })))
}

/// Health check endpoint for container probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "factcheck-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
