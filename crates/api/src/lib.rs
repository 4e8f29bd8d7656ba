//! Inbound HTTP surface of the translation gateway.
//!
//! Exposes `GET /translate/:kind/:name` over a shared
//! [`gateway::TranslationPipeline`] and renders every outcome as a single JSON
//! object: the success envelope with `200`, or an error envelope with `400`
//! (request shape), `424` (an upstream stage failed) or `404` (no route).
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Routing, extraction, status codes and request tracing
//! live here; the pipeline itself knows nothing about HTTP.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::build_router;
