//! A repository with a scripted score table, for tests that need exact
//! control over relevance values.

use std::collections::HashMap;

use crate::keyword_index::{KeywordRepository, Resource, ScoredKeyword};

/// [`KeywordRepository`] whose scores come from a fixed table instead of a
/// matching heuristic. A keyword is a candidate when its lowercased name
/// contains the queried prefix; its score is looked up by name (default
/// 1.0). Iteration order is the order resources were supplied in.
pub struct ScriptedRepository {
    resources: Vec<Resource>,
    scores: HashMap<String, f64>,
}

impl ScriptedRepository {
    pub fn new(resources: Vec<Resource>, scores: &[(&str, f64)]) -> Self {
        Self {
            resources,
            scores: scores
                .iter()
                .map(|(name, score)| (name.to_lowercase(), *score))
                .collect(),
        }
    }
}

impl KeywordRepository for ScriptedRepository {
    fn resources(&self) -> Box<dyn Iterator<Item = &Resource> + '_> {
        Box::new(self.resources.iter())
    }

    fn score(
        &self,
        keyword_prefix: &str,
        resource_filter: Option<&str>,
    ) -> Vec<ScoredKeyword<'_>> {
        let prefix = keyword_prefix.trim().to_lowercase();
        let mut scored = Vec::new();
        for resource in &self.resources {
            if let Some(filter) = resource_filter {
                if resource.resource_key != filter {
                    continue;
                }
            }
            for keyword in &resource.keywords {
                let name_lower = keyword.name.to_lowercase();
                if name_lower.contains(&prefix) {
                    scored.push(ScoredKeyword {
                        keyword,
                        resource,
                        score: self.scores.get(&name_lower).copied().unwrap_or(1.0),
                    });
                }
            }
        }
        scored
    }
}
