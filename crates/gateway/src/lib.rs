//! Translation gateway orchestration.
//!
//! [`TranslationPipeline`] validates the `kind`/`name` request parameters and
//! sequences the two dependent upstream stages behind the [`pipeline`] port
//! traits. Every way out of the pipeline that is not a success is a
//! [`PipelineFailure`], which knows its [`Stage`] and how to render itself as
//! the outward [`pipeline::ErrorEnvelope`].
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** This crate sequences calls between domain types and
//! infrastructure traits. It contains no transport code and no HTTP status
//! mapping; the `api` crate decides status codes from [`Stage`].

mod failure;
mod orchestrator;

pub use failure::{PipelineFailure, Stage, BAD_REQUEST_CODE};
pub use orchestrator::TranslationPipeline;
