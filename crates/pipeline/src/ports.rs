//! Port traits implemented by the upstream adapter crates.
//!
//! The orchestrator depends only on these traits; concrete HTTP clients are
//! injected by the composition root and replaced by fakes in tests.

use async_trait::async_trait;

use crate::{EntityName, LookupError, LookupResult, TransformationError, TransformationResult};

/// Supplies a free-text description for a named entity.
#[async_trait]
pub trait DescriptionSource: Send + Sync {
    /// Fetches the first English-language description of `name`.
    async fn fetch_description(&self, name: &EntityName) -> Result<LookupResult, LookupError>;
}

/// Rewrites a piece of text (e.g. into Shakespearean English).
#[async_trait]
pub trait TextTransformer: Send + Sync {
    /// Transforms `text`, returning non-empty transformed text.
    async fn transform(&self, text: &str) -> Result<TransformationResult, TransformationError>;
}
