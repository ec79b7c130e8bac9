//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/hello", get(handlers::hello))
        // Market data
        .route("/search", get(handlers::search_assets))
        .route("/markets", get(handlers::markets))
        .route("/coin/:coin_id", get(handlers::coin_details))
        // Token lookup
        .route("/token/ethereum/:address", get(handlers::token_by_contract))
        .route("/token/ethereum/:address/full", get(handlers::token_full))
        // Intent router
        .route("/ask", post(handlers::ask_bot));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/test", get(handlers::diagnostics))
        .nest("/api", api)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
