//! Router construction for the gateway.

use axum::{routing::get, Extension, Router};
use gateway::TranslationPipeline;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the full axum router with all routes and middleware.
pub fn build_router(pipeline: TranslationPipeline) -> Router {
    Router::new()
        .route(
            "/healthz",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/translate/:kind/:name",
            get(handlers::translate).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(pipeline))
}
