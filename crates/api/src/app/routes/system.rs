use axum::http::StatusCode;

/// Liveness probe; no auth.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
