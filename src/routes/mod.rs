// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use chat::{chat_handler, status_handler};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(status_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}

/// Explicit origin allow-list with credentials. Methods and headers are
/// mirrored from the request because `Any` is not allowed alongside credentials.
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub fn build_app(state: SharedState, origins: &[HeaderValue]) -> Router {
    create_router().with_state(state).layer(cors_layer(origins))
}
