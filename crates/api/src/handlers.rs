//! Request handlers.
//!
//! GET /healthz                  — liveness check
//! GET /translate/:kind/:name    — run the translation pipeline
//!
//! Any other method on these routes gets [`method_not_allowed`]; any other
//! path gets [`not_found`].

use axum::{
    extract::{rejection::PathRejection, Path},
    Extension, Json,
};
use gateway::TranslationPipeline;
use pipeline::SuccessEnvelope;
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "shakespeare-gateway";

/// Body of `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always `true` while the process can answer requests.
    pub ok: bool,
    /// Always [`SERVICE_NAME`].
    pub service: &'static str,
}

/// Reports liveness. Touches no upstream.
pub async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: SERVICE_NAME,
    })
}

/// Runs the translation pipeline for one `kind`/`name` pair.
///
/// Each request gets its own span carrying a fresh request id.
pub async fn translate(
    Extension(pipeline): Extension<TranslationPipeline>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    let Path((kind, name)) = path?;
    let request_id = Uuid::new_v4();
    let span = info_span!("translate", %request_id, %kind, %name);

    async move {
        match pipeline.run(&kind, &name).await {
            Ok(reply) => {
                info!("translate request succeeded");
                Ok(Json(reply))
            }
            Err(failure) => {
                info!(stage = ?failure.stage(), "translate request failed");
                Err(ApiError::from(failure))
            }
        }
    }
    .instrument(span)
    .await
}

/// Router-level fallback: JSON 404.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Per-route fallback for unsupported methods: JSON 405.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
