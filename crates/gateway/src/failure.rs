//! Pipeline exit points and their outward error envelopes.

use pipeline::{
    EntityName, ErrorEnvelope, InvalidEntityName, InvalidKind, LookupError, TransformationError,
};
use thiserror::Error;

/// Outward `code` for request-shape failures.
pub const BAD_REQUEST_CODE: &str = "bad request";

const LOOKUP_CODE_PREFIX: &str = "failed to get description for ";
const TRANSFORMATION_CODE_PREFIX: &str = "failed to get translation for ";

/// Which part of the pipeline rejected the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Path parameters were rejected before any upstream call.
    Validation,
    /// The description lookup failed.
    Lookup,
    /// The text transformation failed.
    Transformation,
}

/// A request that left the pipeline before producing a success envelope.
#[derive(Debug, Error)]
pub enum PipelineFailure {
    /// `kind` is not in the allow-list.
    #[error(transparent)]
    InvalidKind(#[from] InvalidKind),

    /// `name` was empty or a dot segment.
    #[error(transparent)]
    InvalidName(#[from] InvalidEntityName),

    /// The lookup stage failed for `name`.
    #[error("failed to get description for {name}: {source}")]
    Lookup {
        /// Entity whose description was requested.
        name: EntityName,
        /// Why the lookup failed.
        #[source]
        source: LookupError,
    },

    /// The transformation stage failed for `name`.
    #[error("failed to get translation for {name}: {source}")]
    Transformation {
        /// Entity whose description was being transformed.
        name: EntityName,
        /// Why the transformation failed.
        #[source]
        source: TransformationError,
    },
}

impl PipelineFailure {
    /// Returns the stage that produced this failure.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineFailure::InvalidKind(_) | PipelineFailure::InvalidName(_) => Stage::Validation,
            PipelineFailure::Lookup { .. } => Stage::Lookup,
            PipelineFailure::Transformation { .. } => Stage::Transformation,
        }
    }

    /// Renders the failure as the outward error envelope.
    ///
    /// `message` is the underlying failure's own text; `code` is a synthesized
    /// label naming the failed stage and entity, never an upstream code.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        match self {
            PipelineFailure::InvalidKind(err) => {
                ErrorEnvelope::new(err.to_string(), BAD_REQUEST_CODE)
            }
            PipelineFailure::InvalidName(err) => {
                ErrorEnvelope::new(err.to_string(), BAD_REQUEST_CODE)
            }
            PipelineFailure::Lookup { name, source } => {
                ErrorEnvelope::new(source.to_string(), format!("{LOOKUP_CODE_PREFIX}{name}"))
            }
            PipelineFailure::Transformation { name, source } => ErrorEnvelope::new(
                source.to_string(),
                format!("{TRANSFORMATION_CODE_PREFIX}{name}"),
            ),
        }
    }
}
