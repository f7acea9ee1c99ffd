// lib.rs - Completion suggestion engine for keyword-driven test files.
//
// Ranks and formats completion candidates for keyword-driven test-automation
// sources: resource display names for import statements, and keywords looked
// up through an injected read-only repository, ordered by same-file affinity,
// relevance score, and name. The engine is synchronous and stateless per
// call; parsing source files into an index and wiring suggestions into an
// editor are the caller's concern.

pub mod config;
pub mod dot_notation;
pub mod format;
pub mod keyword_index;
pub mod paths;
pub mod suggest;

// test_utils is available in test builds and when the `test-support` feature
// is enabled, so integration tests and downstream fixtures can import it
// directly.
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;


pub use config::SuggestionConfig;
pub use dot_notation::DotNotationInfo;
pub use format::Suggestion;
pub use keyword_index::{Keyword, KeywordIndex, KeywordRepository, Resource, ScoredKeyword};
pub use suggest::get_suggestions;
