//! Wire shapes of the FunTranslations API.
//!
//! [`UpstreamErrorBody`] intentionally mirrors, but does not reuse,
//! [`pipeline::ErrorEnvelope`]: the upstream owns this shape and may change it
//! without touching the gateway's own outward contract.

use pipeline::ScalarCode;
use serde::Deserialize;

/// Success body. A missing `contents` object reads as an empty translation.
#[derive(Debug, Deserialize)]
pub(crate) struct TranslationRecord {
    #[serde(default)]
    pub contents: TranslationContents,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TranslationContents {
    #[serde(default)]
    pub translated: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamErrorBody {
    pub error: UpstreamErrorDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamErrorDetails {
    pub message: String,
    pub code: ScalarCode,
}
