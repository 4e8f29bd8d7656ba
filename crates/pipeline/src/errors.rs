//! Error taxonomy for the translation pipeline domain.
//!
//! Each pipeline stage owns one error enum ([`LookupError`], [`TransformationError`]).
//! The `Display` text of every variant is the human-readable message that ends up
//! in the outward [`crate::ErrorEnvelope`], so messages are written for API callers,
//! not for operators.
//!
//! [`DecodeError`] is internal to [`crate::ScalarCode`] and surfaces only as the
//! cause of whichever parse it occurred in.

use thiserror::Error;

use crate::ScalarCode;

/// Boxed transport-level cause carried by the `Transport` variants.
///
/// Kept as a trait object so this crate never depends on an HTTP client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Scalar decoding
// ---------------------------------------------------------------------------

/// A JSON value arrived with a type that has no string normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Only strings and numbers are accepted.
    #[error("unexpected value type: {found}")]
    UnexpectedType {
        /// JSON type name of the rejected value (`"object"`, `"array"`, `"boolean"`, `"null"`).
        found: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

/// The `kind` path parameter is not in the supported allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid kind: only 'pokemon' is supported")]
pub struct InvalidKind {
    /// The value that was rejected.
    pub requested: String,
}

/// The `name` path parameter cannot address a single upstream resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEntityName {
    /// The name was empty.
    #[error("entity name must not be empty")]
    Empty,

    /// The name was `.` or `..`, which URL path resolution collapses.
    #[error("entity name must not be '.' or '..'")]
    DotSegment,
}

// ---------------------------------------------------------------------------
// Lookup stage
// ---------------------------------------------------------------------------

/// Failures of the description lookup stage.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The lookup service could not be reached (DNS, connect, timeout).
    #[error("{source}")]
    Transport {
        /// Underlying client error.
        #[source]
        source: BoxError,
    },

    /// The lookup service answered with anything other than `200 OK`.
    ///
    /// The body is not inspected; its shape is not part of any contract.
    #[error("failed to get description: upstream returned status {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the upstream.
        status: u16,
    },

    /// A `200 OK` body did not match the expected species record.
    #[error("response was not a Pokemon API format")]
    MalformedResponse {
        /// Parse failure.
        #[source]
        source: BoxError,
    },

    /// The record had no English-language text entry.
    #[error("no description found")]
    NoDescriptionFound,
}

// ---------------------------------------------------------------------------
// Transformation stage
// ---------------------------------------------------------------------------

/// Failures of the text transformation stage.
#[derive(Debug, Error)]
pub enum TransformationError {
    /// The transformation service could not be reached (DNS, connect, timeout).
    #[error("{source}")]
    Transport {
        /// Underlying client error.
        #[source]
        source: BoxError,
    },

    /// The transformation service reported an application-level error.
    ///
    /// Both fields are copied verbatim from the upstream error body.
    #[error("API Error: Code={code}, Message={message}")]
    Upstream {
        /// Upstream diagnostic text.
        message: String,
        /// Upstream error code, normalized to a string.
        code: ScalarCode,
    },

    /// The upstream flagged an error but its body was not an error envelope.
    #[error("upstream error response was not in the expected format (status {status})")]
    MalformedUpstreamError {
        /// HTTP status code returned by the upstream.
        status: u16,
        /// Parse failure.
        #[source]
        source: BoxError,
    },

    /// A success body did not match the expected translation record.
    #[error("response was not a Translation API format")]
    MalformedResponse {
        /// Parse failure.
        #[source]
        source: BoxError,
    },

    /// The upstream succeeded but returned empty translated text.
    #[error("no translation found")]
    NoTranslationFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_kind_message_is_fixed() {
        let err = InvalidKind {
            requested: "shakespeare".into(),
        };
        assert_eq!(err.to_string(), "invalid kind: only 'pokemon' is supported");
    }

    #[test]
    fn transport_errors_pass_the_cause_text_through() {
        let err = LookupError::Transport {
            source: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "connection refused");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn upstream_transformation_error_carries_code_and_message() {
        let err = TransformationError::Upstream {
            message: "rate limit exceeded".into(),
            code: ScalarCode::from("429"),
        };
        assert_eq!(
            err.to_string(),
            "API Error: Code=429, Message=rate limit exceeded"
        );
    }

    #[test]
    fn shape_errors_use_caller_facing_messages() {
        assert_eq!(
            LookupError::NoDescriptionFound.to_string(),
            "no description found"
        );
        assert_eq!(
            TransformationError::NoTranslationFound.to_string(),
            "no translation found"
        );
        assert_eq!(
            LookupError::UpstreamStatus { status: 404 }.to_string(),
            "failed to get description: upstream returned status 404"
        );
    }
}
