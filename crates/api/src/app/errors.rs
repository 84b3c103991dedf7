use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use spendlog_core::validate;

/// Respond with the uniform single-key error shape `{"error": "<message>"}`.
pub fn json_error(status: StatusCode, err: impl std::fmt::Display) -> axum::response::Response {
    (status, Json(validate::generic_error(err))).into_response()
}
