use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe; never touches the database
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unknown paths and unsupported methods
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}
