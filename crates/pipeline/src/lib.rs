//! Core domain for the Shakespeare translation gateway.
//!
//! This crate contains every domain concept, value type, and error type used by
//! the request-aggregation pipeline. Infrastructure crates implement the traits
//! defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; the `pokeapi` and `funtranslations` crates
//! define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Request identifiers (`EntityName`, `Kind`) |
//! | [`types`] | `ScalarCode`, outward envelopes, stage results |
//! | [`errors`] | Per-stage error enums and `DecodeError` |
//! | [`ports`] | `DescriptionSource` and `TextTransformer` traits |

pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{
    BoxError, DecodeError, InvalidEntityName, InvalidKind, LookupError, TransformationError,
};
pub use identifiers::{EntityName, Kind};
pub use ports::{DescriptionSource, TextTransformer};
pub use types::{
    ErrorDetails, ErrorEnvelope, LookupResult, ScalarCode, SuccessEnvelope, TransformationResult,
};
