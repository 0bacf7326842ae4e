use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::middleware::{authentication_gate, logging_middleware, require_authentication};
use super::state::AppState;
use super::types::ApiError;

/// Create the full router with application state
///
/// Layers run outermost first: trace, request logging, authentication gate,
/// route protection, handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/auth", auth::create_auth_router())
        .fallback(|| async { ApiError::not_found("Resource not found") })
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state.access_policy.clone(),
            require_authentication,
        ))
        .layer(middleware::from_fn_with_state(
            state.token_codec.clone(),
            authentication_gate,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
