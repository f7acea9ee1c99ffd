//
// config.rs
//
// Presentation settings for the suggestion engine
//

use anyhow::Context;
use serde::Deserialize;

/// Settings controlling which suggestions are produced and how they are
/// presented.
///
/// Field names deserialize from the camelCase form used by editor settings
/// objects (`showLibrarySuggestions`, `maxKeywordsSuggestionsCap`, ...).
/// Every field is optional on the wire: missing fields take their
/// permissive default (false / 0) and unknown fields are ignored, so a
/// malformed or partial settings object degrades rather than fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionConfig {
    /// Offer import-kind suggestions for matching resource display names.
    pub show_library_suggestions: bool,
    /// Resolve dot-notation prefixes (`LibraryName.partialKeyword`) into a
    /// per-resource search scope.
    pub match_file_name: bool,
    /// Append the argument list to keyword display text.
    pub show_arguments: bool,
    /// Upper bound on returned keyword suggestions. Zero disables keyword
    /// suggestions entirely.
    pub max_keywords_suggestions_cap: usize,
}

impl SuggestionConfig {
    /// Deserialize from a settings JSON value, falling back to the default
    /// configuration when the value does not parse. Never fails.
    pub fn from_json(value: serde_json::Value) -> Self {
        Self::try_from_json(value).unwrap_or_default()
    }

    /// Deserialize from a settings JSON value, surfacing the parse error.
    pub fn try_from_json(value: serde_json::Value) -> anyhow::Result<Self> {
        serde_json::from_value(value).context("invalid suggestion settings")
    }
}
