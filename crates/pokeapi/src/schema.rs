//! Wire shapes of the PokeAPI `pokemon-species` resource.
//!
//! Only the fields the gateway reads are modelled; everything else in the
//! record is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SpeciesRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}

impl SpeciesRecord {
    /// Returns the first flavor text whose language tag equals `language`.
    pub(crate) fn first_text_in(&self, language: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.as_str())
    }
}
