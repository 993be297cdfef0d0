//! Rendering of lookup results for the terminal
//!
//! Text output prints one line per breed as results arrive; JSON output
//! collects every successful lookup and prints a single array at the end.

use serde::Serialize;

use crate::data::SubBreeds;

/// Placeholder shown for breeds that have no sub-breeds
const NO_SUB_BREEDS: &str = "(no sub-breeds)";

/// A successful lookup, as printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedLookup {
    /// The breed as given on the command line
    pub breed: String,
    /// Sub-breeds in the order the API returned them
    pub sub_breeds: SubBreeds,
}

impl BreedLookup {
    /// Creates a lookup result for `breed` as typed by the user
    pub fn new(breed: impl Into<String>, sub_breeds: SubBreeds) -> Self {
        Self {
            breed: breed.into(),
            sub_breeds,
        }
    }
}

/// Renders a lookup as a single `breed: a, b, c` line
pub fn render_text(lookup: &BreedLookup) -> String {
    if lookup.sub_breeds.is_empty() {
        format!("{}: {}", lookup.breed, NO_SUB_BREEDS)
    } else {
        format!("{}: {}", lookup.breed, lookup.sub_breeds.join(", "))
    }
}

/// Renders all lookups as a pretty-printed JSON array
pub fn render_json(lookups: &[BreedLookup]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lookups)
}
