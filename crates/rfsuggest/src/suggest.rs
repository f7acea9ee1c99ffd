//
// suggest.rs
//
// Library-name matching, keyword ranking, and the top-level suggestion
// entry point
//

use std::cmp::Ordering;

use crate::config::SuggestionConfig;
use crate::dot_notation;
use crate::format::{self, Suggestion};
use crate::keyword_index::{KeywordRepository, ScoredKeyword};
use crate::paths;

/// Compute the ordered suggestion list for a typed prefix.
///
/// `current_resource_key` identifies the file the completion request
/// originates from; it gates local-keyword visibility and biases ranking
/// toward keywords defined in the same file. Import suggestions (matching
/// resource display names) always precede keyword suggestions, and are
/// always derived from the raw prefix; dot-notation scoping only affects
/// the keyword search.
///
/// Degenerate inputs shrink the result rather than failing: an unknown
/// resource key simply loses same-file bias and hides every local keyword.
pub fn get_suggestions(
    prefix: &str,
    current_resource_key: &str,
    config: &SuggestionConfig,
    repository: &dyn KeywordRepository,
) -> Vec<Suggestion> {
    let mut suggestions = library_name_suggestions(prefix, config, repository);
    suggestions.extend(keyword_suggestions(
        prefix,
        current_resource_key,
        config,
        repository,
    ));
    suggestions
}

/// Import-kind suggestions: resource display names starting with the
/// trimmed, lowercased prefix (so `buil` suggests `BuiltIn`). Sorted by
/// display text; no cap applies.
fn library_name_suggestions(
    prefix: &str,
    config: &SuggestionConfig,
    repository: &dyn KeywordRepository,
) -> Vec<Suggestion> {
    if !config.show_library_suggestions {
        return Vec::new();
    }
    let prefix = prefix.trim().to_lowercase();

    let mut suggestions: Vec<Suggestion> = repository
        .resources()
        .filter(|resource| resource.name.to_lowercase().starts_with(&prefix))
        .map(|resource| Suggestion::Import {
            text: resource.name.clone(),
            display_text: resource.name.clone(),
            replacement_prefix: prefix.clone(),
        })
        .collect();

    suggestions.sort_by(|a, b| a.display_text().cmp(b.display_text()));
    log::trace!(
        "{} library-name suggestions for prefix {:?}",
        suggestions.len(),
        prefix
    );
    suggestions
}

/// Keyword-kind suggestions: resolve dot-notation scope, obtain scored
/// candidates, order them, drop keywords not visible from the current file,
/// cap the result, and format what survives.
fn keyword_suggestions(
    prefix: &str,
    current_resource_key: &str,
    config: &SuggestionConfig,
    repository: &dyn KeywordRepository,
) -> Vec<Suggestion> {
    let current_key = paths::normalize_key(current_resource_key);
    let current_base = paths::base_name(&current_key).to_string();

    let info = dot_notation::resolve(prefix, config.match_file_name, repository);
    log::debug!(
        "keyword lookup: prefix={:?} scoped={} filter={:?}",
        info.keyword_prefix,
        info.dot_notation,
        info.resource_filter
    );

    let mut scored = repository.score(&info.keyword_prefix, info.resource_filter.as_deref());
    scored.sort_by(|a, b| rank(a, b, &current_base));

    // Visibility before the cap: a hidden local keyword must never consume
    // a result slot.
    scored
        .into_iter()
        .filter(|candidate| !candidate.keyword.local || candidate.resource.resource_key == current_key)
        .take(config.max_keywords_suggestions_cap)
        .map(|candidate| {
            format::keyword_suggestion(
                candidate.keyword,
                candidate.resource,
                info.dot_notation,
                prefix,
                config,
            )
        })
        .collect()
}

/// Composite ranking over scored candidates, in strict priority order:
/// keywords owned by a resource sharing the current file's base name come
/// first, then higher scores, then ascending keyword name. Total and
/// deterministic; `f64::total_cmp` keeps the score leg an order even for
/// pathological score values.
fn rank(a: &ScoredKeyword, b: &ScoredKeyword, current_base: &str) -> Ordering {
    let a_same_file = paths::base_name(&a.resource.resource_key) == current_base;
    let b_same_file = paths::base_name(&b.resource.resource_key) == current_base;
    b_same_file
        .cmp(&a_same_file)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.keyword.name.cmp(&b.keyword.name))
}
