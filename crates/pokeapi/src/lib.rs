//! PokeAPI species lookup adapter.
//!
//! Implements [`pipeline::DescriptionSource`] by fetching
//! `GET <base>/{name}` and selecting the first English flavor text entry.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, URL construction, timeouts and response
//! parsing live here. The [`pipeline`] crate sees only
//! [`pipeline::DescriptionSource`] and [`pipeline::LookupError`].
//!
//! Only `200 OK` counts as success; any other status is reported without
//! reading the body.

mod client;
mod schema;

pub use client::{ClientBuildError, PokeApiClient, DEFAULT_BASE_URL, DESCRIPTION_LANGUAGE};
