//! HTTP client for the text transformation service.

use std::time::Duration;

use async_trait::async_trait;
use pipeline::{TextTransformer, TransformationError, TransformationResult};
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::schema::{TranslationRecord, UpstreamErrorBody};

/// Shakespeare endpoint used when no URL is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.funtranslations.com/translate/shakespeare.json";

/// Form field carrying the text to transform.
pub const TEXT_FIELD: &str = "text";

/// The client could not be constructed.
#[derive(Debug, Error)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// Posts text to FunTranslations (or any service with the same shape).
#[derive(Debug, Clone)]
pub struct FunTranslationsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl FunTranslationsClient {
    /// Creates a client for `endpoint` whose every request is bounded by `timeout`.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ClientBuildError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl TextTransformer for FunTranslationsClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint, chars = text.chars().count()))]
    async fn transform(&self, text: &str) -> Result<TransformationResult, TransformationError> {
        debug!("posting text for translation");

        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&[(TEXT_FIELD, text)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "translation transport failure");
                TransformationError::Transport { source: e.into() }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransformationError::Transport { source: e.into() })?;

        if status.is_client_error() || status.is_server_error() {
            let upstream: UpstreamErrorBody = serde_json::from_slice(&body).map_err(|e| {
                warn!(status = status.as_u16(), error = %e, "unreadable upstream error body");
                TransformationError::MalformedUpstreamError {
                    status: status.as_u16(),
                    source: e.into(),
                }
            })?;
            warn!(
                status = status.as_u16(),
                code = %upstream.error.code,
                message = %upstream.error.message,
                "translation upstream reported an error"
            );
            return Err(TransformationError::Upstream {
                message: upstream.error.message,
                code: upstream.error.code,
            });
        }

        let record: TranslationRecord = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "translation record did not match the expected shape");
            TransformationError::MalformedResponse { source: e.into() }
        })?;

        if record.contents.translated.is_empty() {
            warn!("translation upstream returned empty text");
            return Err(TransformationError::NoTranslationFound);
        }

        Ok(TransformationResult {
            text: record.contents.translated,
        })
    }
}
