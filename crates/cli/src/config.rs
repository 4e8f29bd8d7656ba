//! Runtime configuration, read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GATEWAY_BIND_ADDR` | `0.0.0.0:8080` |
//! | `GATEWAY_POKEAPI_BASE_URL` | [`pokeapi::DEFAULT_BASE_URL`] |
//! | `GATEWAY_TRANSLATION_URL` | [`funtranslations::DEFAULT_ENDPOINT`] |
//! | `GATEWAY_UPSTREAM_TIMEOUT_SECS` | `5` |
//! | `GATEWAY_LOG_FORMAT` | `compact` (or `json`) |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Socket address the HTTP listener binds.
pub const BIND_ADDR_VAR: &str = "GATEWAY_BIND_ADDR";
/// Species collection URL; the entity name is appended as one path segment.
pub const POKEAPI_BASE_URL_VAR: &str = "GATEWAY_POKEAPI_BASE_URL";
/// Full URL of the Shakespeare translation endpoint.
pub const TRANSLATION_URL_VAR: &str = "GATEWAY_TRANSLATION_URL";
/// Per-call upstream timeout in whole seconds; must be non-zero.
pub const UPSTREAM_TIMEOUT_VAR: &str = "GATEWAY_UPSTREAM_TIMEOUT_SECS";
/// `compact` or `json`, case-insensitive.
pub const LOG_FORMAT_VAR: &str = "GATEWAY_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// A configuration variable held an unusable value.
#[derive(Debug, Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    /// Name of the offending variable.
    pub var: &'static str,
    /// The raw value that was rejected.
    pub value: String,
    /// Parser or validation message.
    pub reason: String,
}

/// Console log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human-readable events.
    Compact,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err("expected 'compact' or 'json'".to_string()),
        }
    }
}

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listener address.
    pub bind_addr: SocketAddr,
    /// PokeAPI species collection URL.
    pub pokeapi_base_url: Url,
    /// FunTranslations Shakespeare endpoint.
    pub translation_url: Url,
    /// Timeout applied to each upstream call individually.
    pub upstream_timeout: Duration,
    /// Console log format.
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, applying defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout_secs: u64 = parse_var(&lookup, UPSTREAM_TIMEOUT_VAR, || {
            DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string()
        })?;
        if timeout_secs == 0 {
            return Err(ConfigError {
                var: UPSTREAM_TIMEOUT_VAR,
                value: timeout_secs.to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Self {
            bind_addr: parse_var(&lookup, BIND_ADDR_VAR, || DEFAULT_BIND_ADDR.to_string())?,
            pokeapi_base_url: parse_var(&lookup, POKEAPI_BASE_URL_VAR, || {
                pokeapi::DEFAULT_BASE_URL.to_string()
            })?,
            translation_url: parse_var(&lookup, TRANSLATION_URL_VAR, || {
                funtranslations::DEFAULT_ENDPOINT.to_string()
            })?,
            upstream_timeout: Duration::from_secs(timeout_secs),
            log_format: parse_var(&lookup, LOG_FORMAT_VAR, || "compact".to_string())?,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: impl FnOnce() -> String,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(var).unwrap_or_else(default);
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}
