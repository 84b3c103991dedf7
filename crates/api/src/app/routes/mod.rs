use axum::Router;

pub mod expenses;
pub mod system;

/// Router for all token-gated endpoints.
pub fn router() -> Router {
    Router::new().nest("/expenses", expenses::router())
}
