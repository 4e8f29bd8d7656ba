//! Shared value types for the translation pipeline.
//!
//! Everything here is request-scoped: produced while serving one inbound
//! request and dropped with its response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::DecodeError;

// ---------------------------------------------------------------------------
// Polymorphic scalar
// ---------------------------------------------------------------------------

/// An error code that may arrive on the wire as a JSON string or a JSON number.
///
/// Once decoded it is always a string. Numbers are rendered in their shortest
/// round-tripping decimal form without exponent or trailing zeros, so `429`,
/// `429.0` and `"429"` all decode to `"429"`. Serializes as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScalarCode(String);

impl ScalarCode {
    /// Decodes a JSON value, accepting strings and numbers only.
    pub fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            Value::Number(n) => Ok(Self(format_number(n))),
            Value::Bool(_) => Err(DecodeError::UnexpectedType { found: "boolean" }),
            Value::Null => Err(DecodeError::UnexpectedType { found: "null" }),
            Value::Array(_) => Err(DecodeError::UnexpectedType { found: "array" }),
            Value::Object(_) => Err(DecodeError::UnexpectedType { found: "object" }),
        }
    }

    /// Returns the normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display never switches to exponent notation and drops a zero fraction.
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

impl<'de> Deserialize<'de> for ScalarCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

impl From<String> for ScalarCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ScalarCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ScalarCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Outward envelopes
// ---------------------------------------------------------------------------

/// The single outward error shape: `{ "error": { "message", "code" } }`.
///
/// Every client-visible failure is rendered through this type, whatever its
/// internal cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error payload.
    pub error: ErrorDetails,
}

impl ErrorEnvelope {
    /// Builds an envelope from a message and a code.
    pub fn new(message: impl Into<String>, code: impl Into<ScalarCode>) -> Self {
        Self {
            error: ErrorDetails {
                message: message.into(),
                code: code.into(),
            },
        }
    }
}

/// Body of an [`ErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Caller-oriented label identifying the failure class or stage.
    pub code: ScalarCode,
}

/// Outward success shape: `{ "name", "description" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    /// Entity name exactly as requested.
    pub name: String,
    /// Transformed description text.
    pub description: String,
}

// ---------------------------------------------------------------------------
// Stage results
// ---------------------------------------------------------------------------

/// Output of the lookup stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Display name reported by the lookup service.
    pub name: String,
    /// First English-language description text.
    pub description: String,
}

/// Output of the transformation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationResult {
    /// Transformed text; never empty.
    pub text: String,
}
