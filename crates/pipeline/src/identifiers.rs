//! Request identifiers: the entity being described and the transformation kind.
//!
//! Both arrive as raw path segments. [`EntityName`] is a validated newtype;
//! [`Kind`] is a closed allow-list so that adding a kind is a new variant rather
//! than a new branch in the pipeline.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InvalidEntityName, InvalidKind};

// ---------------------------------------------------------------------------
// Entity name
// ---------------------------------------------------------------------------

/// Names the entity whose description is looked up (e.g. `"pikachu"`).
///
/// Passed to the lookup service as a single path segment; never trimmed or
/// case-folded here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityName(String);

impl EntityName {
    /// Creates a new name.
    ///
    /// Rejects the empty string and the dot segments `.` and `..`, none of
    /// which survive being appended to a URL path as one segment.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidEntityName> {
        let v = value.into();
        match v.as_str() {
            "" => Err(InvalidEntityName::Empty),
            "." | ".." => Err(InvalidEntityName::DotSegment),
            _ => Ok(Self(v)),
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EntityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Selects which lookup + transformation pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Pokémon species flavor text, rendered as Shakespearean English.
    Pokemon,
}

impl Kind {
    /// Every supported kind, in declaration order.
    pub const ALL: [Kind; 1] = [Kind::Pokemon];

    /// Returns the path-segment spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Pokemon => "pokemon",
        }
    }
}

impl FromStr for Kind {
    type Err = InvalidKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InvalidKind {
                requested: s.to_string(),
            })
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
