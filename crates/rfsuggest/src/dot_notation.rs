//
// dot_notation.rs
//
// Resolution of library-scoped prefixes into a resource filter and a
// residual keyword-name prefix
//

use crate::keyword_index::KeywordRepository;

/// Outcome of resolving a typed prefix against the known resource names.
///
/// Computed once per request and discarded. When `dot_notation` is true the
/// search is scoped: `resource_filter` names the matched resource and
/// `keyword_prefix` holds whatever followed its name. Otherwise
/// `keyword_prefix` is the whole prefix, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DotNotationInfo {
    pub dot_notation: bool,
    pub keyword_prefix: String,
    pub resource_filter: Option<String>,
}

/// Decide whether `prefix` scopes the search to a single resource.
///
/// Both `BuiltIn.run` and `BuiltInrun` scope to the resource named
/// `BuiltIn` with residual prefix `run`; the dotted form consumes the
/// separator, the undotted form consumes nothing beyond the name. Matching
/// is case-insensitive on the resource display name. The first matching
/// resource in the repository's iteration order wins; overlapping resource
/// names resolve by that order, not by longest name.
///
/// When `match_file_name` is false, scoping is never attempted.
pub fn resolve(
    prefix: &str,
    match_file_name: bool,
    repository: &dyn KeywordRepository,
) -> DotNotationInfo {
    let prefix = prefix.trim().to_lowercase();
    if match_file_name {
        for resource in repository.resources() {
            let name = resource.name.trim().to_lowercase();
            if name.is_empty() {
                // An unnamed resource would match every prefix
                continue;
            }
            let dotted = format!("{name}.");
            if prefix.starts_with(&dotted) {
                log::trace!("prefix {:?} scoped to {:?} (dotted)", prefix, resource.resource_key);
                return DotNotationInfo {
                    dot_notation: true,
                    keyword_prefix: prefix[dotted.len()..].to_string(),
                    resource_filter: Some(resource.resource_key.clone()),
                };
            }
            if prefix.starts_with(&name) {
                log::trace!("prefix {:?} scoped to {:?}", prefix, resource.resource_key);
                return DotNotationInfo {
                    dot_notation: true,
                    keyword_prefix: prefix[name.len()..].to_string(),
                    resource_filter: Some(resource.resource_key.clone()),
                };
            }
        }
    }
    DotNotationInfo {
        dot_notation: false,
        keyword_prefix: prefix,
        resource_filter: None,
    }
}
