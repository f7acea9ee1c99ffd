//
// keyword_index.rs
//
// Keyword/resource data model, the repository seam, and an in-memory index
//

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::paths;

// ============================================================================
// Data model
// ============================================================================

/// A callable procedure definition owned by exactly one [`Resource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,
    /// Ordered argument names.
    #[serde(default)]
    pub arguments: Vec<String>,
    /// Free-text documentation; the first non-empty line is used as a summary.
    #[serde(default)]
    pub documentation: String,
    /// Local keywords are only visible to completion requests originating
    /// from their own resource.
    #[serde(default)]
    pub local: bool,
}

/// A named source unit (library or reusable test file) owning keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier: the normalized path of the source file.
    pub resource_key: String,
    /// Display name, e.g. the library or file base name.
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// A keyword paired with the relevance score the repository assigned it for
/// one lookup. Carries the owning resource alongside the keyword so the
/// back-reference can never dangle; lives only for the duration of a single
/// ranking call.
#[derive(Debug, Clone)]
pub struct ScoredKeyword<'a> {
    pub keyword: &'a Keyword,
    pub resource: &'a Resource,
    /// Relevance for the queried prefix; higher ranks first.
    pub score: f64,
}

// ============================================================================
// Repository seam
// ============================================================================

/// Read-only view of the keyword universe the engine ranks over.
///
/// The engine receives an implementation per call and performs no writes.
/// `resources()` must iterate in a deterministic order for a given instance
/// so dot-notation resolution is reproducible. The scoring algorithm behind
/// `score` is opaque to the engine; it only relies on "higher is more
/// relevant".
pub trait KeywordRepository {
    /// All known resources, in the repository's deterministic order.
    fn resources(&self) -> Box<dyn Iterator<Item = &Resource> + '_>;

    /// Keywords matching `keyword_prefix`, each with a relevance score.
    /// When `resource_filter` is set, only keywords owned by the resource
    /// with that key are considered.
    fn score(&self, keyword_prefix: &str, resource_filter: Option<&str>)
        -> Vec<ScoredKeyword<'_>>;
}

// ============================================================================
// In-memory index
// ============================================================================

/// In-memory [`KeywordRepository`] backed by an insertion-ordered map.
///
/// Resources are keyed by their normalized resource key; re-adding a
/// resource under the same key replaces it in place. Iteration follows
/// insertion order, which makes dot-notation resolution and scoring
/// reproducible within one index instance.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    resources: IndexMap<String, Resource>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a resource. The resource key is normalized before
    /// use so lookups with equivalent path spellings hit the same entry.
    pub fn add_resource(&mut self, mut resource: Resource) {
        let key = paths::normalize_key(&resource.resource_key);
        log::trace!(
            "indexing resource {:?} ({} keywords) as {:?}",
            resource.name,
            resource.keywords.len(),
            key
        );
        resource.resource_key = key.clone();
        self.resources.insert(key, resource);
    }

    /// Remove a resource by key, preserving the order of the remaining
    /// entries. Returns the removed resource if it was present.
    pub fn remove_resource(&mut self, resource_key: &str) -> Option<Resource> {
        self.resources
            .shift_remove(&paths::normalize_key(resource_key))
    }

    /// Look up a resource by (any spelling of) its key.
    pub fn get(&self, resource_key: &str) -> Option<&Resource> {
        self.resources.get(&paths::normalize_key(resource_key))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn clear(&mut self) {
        self.resources.clear();
    }
}

/// Relevance of `name` for a lowercased prefix, or `None` when it does not
/// match. An empty prefix matches everything at score zero. A match at the
/// start of the name outranks a match elsewhere; within each tier, a prefix
/// covering more of the name scores higher.
fn match_score(name: &str, prefix_lower: &str) -> Option<f64> {
    if prefix_lower.is_empty() {
        return Some(0.0);
    }
    let name_lower = name.to_lowercase();
    let coverage = prefix_lower.len() as f64 / name_lower.len().max(1) as f64;
    if name_lower.starts_with(prefix_lower) {
        Some(2.0 + coverage)
    } else if name_lower.contains(prefix_lower) {
        Some(1.0 + coverage)
    } else {
        None
    }
}

impl KeywordRepository for KeywordIndex {
    fn resources(&self) -> Box<dyn Iterator<Item = &Resource> + '_> {
        Box::new(self.resources.values())
    }

    fn score(
        &self,
        keyword_prefix: &str,
        resource_filter: Option<&str>,
    ) -> Vec<ScoredKeyword<'_>> {
        let prefix = keyword_prefix.trim().to_lowercase();
        let mut scored = Vec::new();
        for resource in self.resources.values() {
            if let Some(filter) = resource_filter {
                if resource.resource_key != filter {
                    continue;
                }
            }
            for keyword in &resource.keywords {
                if let Some(score) = match_score(&keyword.name, &prefix) {
                    scored.push(ScoredKeyword {
                        keyword,
                        resource,
                        score,
                    });
                }
            }
        }
        log::trace!(
            "scored {} candidates for prefix {:?} (filter: {:?})",
            scored.len(),
            prefix,
            resource_filter
        );
        scored
    }
}
