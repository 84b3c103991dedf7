//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring behind `AppServices`
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and their field validation
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(auth_token: String, services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        token: auth_token.into(),
    };

    // Protected routes: every expense operation sits behind the token gate.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
