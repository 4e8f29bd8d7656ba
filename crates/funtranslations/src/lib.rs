//! FunTranslations text transformation adapter.
//!
//! Implements [`pipeline::TextTransformer`] by posting the input as the
//! form-encoded `text` field and reading `contents.translated` from the reply.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, timeouts, and both the success and
//! error response schemas live here. The [`pipeline`] crate sees only
//! [`pipeline::TextTransformer`] and [`pipeline::TransformationError`].
//!
//! ## Error signalling
//!
//! Any `4xx`/`5xx` status marks an application-level error whose body is
//! expected to be `{ "error": { "message", "code" } }`, with `code` either a
//! string or a number.

mod client;
mod schema;

pub use client::{ClientBuildError, FunTranslationsClient, DEFAULT_ENDPOINT, TEXT_FIELD};
