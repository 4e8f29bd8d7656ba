//! HTTP client for the species description lookup.

use std::time::Duration;

use async_trait::async_trait;
use pipeline::{DescriptionSource, EntityName, LookupError, LookupResult};
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::schema::SpeciesRecord;

/// Species endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon-species";

/// Language tag of the description the gateway returns.
pub const DESCRIPTION_LANGUAGE: &str = "en";

/// The client could not be constructed.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The base URL cannot have a name appended as a path segment
    /// (e.g. `mailto:` or `data:` URLs).
    #[error("base URL cannot carry path segments: {0}")]
    UnusableBaseUrl(Url),

    /// The underlying HTTP client failed to initialise (TLS backend, etc.).
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Looks up species flavor text on PokeAPI (or any service with the same shape).
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Creates a client for `base_url` whose every request is bounded by `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ClientBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::UnusableBaseUrl(base_url));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Returns the URL of the species record for `name`.
    ///
    /// The name is appended as a single percent-encoded path segment.
    pub fn species_url(&self, name: &EntityName) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: a base URL always accepts path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name.as_str());
        }
        url
    }
}

#[async_trait]
impl DescriptionSource for PokeApiClient {
    #[instrument(skip_all, fields(entity = %name))]
    async fn fetch_description(&self, name: &EntityName) -> Result<LookupResult, LookupError> {
        let url = self.species_url(name);
        debug!(%url, "requesting species record");

        let response = self.http.get(url).send().await.map_err(|e| {
            error!(error = %e, "species lookup transport failure");
            LookupError::Transport { source: e.into() }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "species lookup returned non-success status");
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport { source: e.into() })?;

        let record: SpeciesRecord = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "species record did not match the expected shape");
            LookupError::MalformedResponse { source: e.into() }
        })?;

        let description = record
            .first_text_in(DESCRIPTION_LANGUAGE)
            .ok_or_else(|| {
                warn!(
                    entries = record.flavor_text_entries.len(),
                    "no flavor text in the description language"
                );
                LookupError::NoDescriptionFound
            })?
            .to_string();

        Ok(LookupResult {
            name: record.name,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PokeApiClient {
        PokeApiClient::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn species_url_appends_one_segment() {
        let name = EntityName::new("pikachu").unwrap();
        assert_eq!(
            client(DEFAULT_BASE_URL).species_url(&name).as_str(),
            "https://pokeapi.co/api/v2/pokemon-species/pikachu"
        );
        assert_eq!(
            client("http://localhost:9000/species/").species_url(&name).as_str(),
            "http://localhost:9000/species/pikachu"
        );
    }

    #[test]
    fn species_url_escapes_path_characters() {
        let name = EntityName::new("mr mime/../x").unwrap();
        assert_eq!(
            client("http://localhost:9000/species").species_url(&name).as_str(),
            "http://localhost:9000/species/mr%20mime%2F..%2Fx"
        );
    }

    #[test]
    fn rejects_base_urls_without_a_path() {
        let err = PokeApiClient::new(
            Url::parse("mailto:ash@example.com").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(matches!(err, ClientBuildError::UnusableBaseUrl(_)));
    }
}
