use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use spendlog_auth::verify_token;
use spendlog_core::validate;

/// Shared secret the auth gate compares incoming tokens against.
#[derive(Clone)]
pub struct AuthState {
    pub token: Arc<str>,
}

/// Reject any request whose `Authorization` header does not carry the
/// configured token. Sits in front of every expense route.
///
/// The header value is compared as-is (no `Bearer ` prefix handling): the
/// secret is the entire header.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let provided = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match verify_token(provided, &state.token) {
        Ok(()) => next.run(req).await,
        Err(err) => {
            tracing::error!(error = %err, "rejected unauthenticated request");
            (StatusCode::UNAUTHORIZED, Json(validate::generic_error(err))).into_response()
        }
    }
}
