//! Mapping from pipeline failures to HTTP responses.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway::{PipelineFailure, Stage, BAD_REQUEST_CODE};
use pipeline::ErrorEnvelope;

/// Any non-success outcome of an API handler.
///
/// Always rendered as an `application/json` [`ErrorEnvelope`].
#[derive(Debug)]
pub enum ApiError {
    /// The translation pipeline rejected or failed the request.
    Pipeline(PipelineFailure),
    /// The path parameters could not be extracted (e.g. invalid percent-encoding).
    Path(PathRejection),
    /// No route matched.
    NotFound,
    /// The route exists but not for this HTTP method.
    MethodNotAllowed,
}

impl ApiError {
    /// Status code for this error.
    ///
    /// Stage failures are always `424 Failed Dependency`: by then the request
    /// itself was valid and only an upstream let it down.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Pipeline(failure) => match failure.stage() {
                Stage::Validation => StatusCode::BAD_REQUEST,
                Stage::Lookup | Stage::Transformation => StatusCode::FAILED_DEPENDENCY,
            },
            ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Outward body for this error.
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::Pipeline(failure) => failure.to_envelope(),
            ApiError::Path(rejection) => {
                ErrorEnvelope::new(rejection.body_text(), BAD_REQUEST_CODE)
            }
            ApiError::NotFound => ErrorEnvelope::new("no such route", "not found"),
            ApiError::MethodNotAllowed => {
                ErrorEnvelope::new("method not allowed", "method not allowed")
            }
        }
    }
}

impl From<PipelineFailure> for ApiError {
    fn from(failure: PipelineFailure) -> Self {
        ApiError::Pipeline(failure)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Path(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pipeline::{
        EntityName, InvalidEntityName, InvalidKind, LookupError, TransformationError,
    };

    use super::*;

    fn pikachu() -> EntityName {
        EntityName::new("pikachu").unwrap()
    }

    #[test]
    fn validation_failures_are_400() {
        let err = ApiError::from(PipelineFailure::from(InvalidKind {
            requested: "digimon".into(),
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn every_stage_failure_is_424() {
        let lookup = ApiError::from(PipelineFailure::Lookup {
            name: pikachu(),
            source: LookupError::UpstreamStatus { status: 503 },
        });
        let transformation = ApiError::from(PipelineFailure::Transformation {
            name: pikachu(),
            source: TransformationError::NoTranslationFound,
        });

        assert_eq!(lookup.status(), StatusCode::FAILED_DEPENDENCY);
        assert_eq!(transformation.status(), StatusCode::FAILED_DEPENDENCY);
    }

    #[test]
    fn unknown_routes_are_404_envelopes() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotFound.envelope().error.code.as_str(),
            "not found"
        );
    }

    #[test]
    fn wrong_method_is_a_405_envelope() {
        let err = ApiError::MethodNotAllowed;
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            err.envelope(),
            ErrorEnvelope::new("method not allowed", "method not allowed")
        );
    }

    #[test]
    fn dot_segment_names_are_400() {
        let err = ApiError::from(PipelineFailure::from(InvalidEntityName::DotSegment));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.envelope().error.code.as_str(), "bad request");
    }
}
