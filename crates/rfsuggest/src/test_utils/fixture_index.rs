//! Deterministic fixture keyword indexes for tests.
//!
//! All fixtures are hand-written constants (no randomness), so every test
//! run sees the same index contents in the same insertion order.

use anyhow::Context;

use crate::keyword_index::{Keyword, KeywordIndex, Resource};

pub fn keyword(name: &str, arguments: &[&str], documentation: &str, local: bool) -> Keyword {
    Keyword {
        name: name.to_string(),
        arguments: arguments.iter().map(|a| a.to_string()).collect(),
        documentation: documentation.to_string(),
        local,
    }
}

pub fn resource(key: &str, name: &str, keywords: Vec<Keyword>) -> Resource {
    Resource {
        resource_key: key.to_string(),
        name: name.to_string(),
        keywords,
    }
}

/// Standard three-resource fixture: a built-in library, a shared resource
/// file, and a suite file with test-local keywords.
pub fn standard_index() -> KeywordIndex {
    let mut index = KeywordIndex::new();
    index.add_resource(resource(
        "lib/BuiltIn.robot",
        "BuiltIn",
        vec![
            keyword("Run Keyword", &["name"], "Runs the named keyword.", false),
            keyword("Sleep", &["time"], "Pauses execution", false),
            keyword("Log", &["message", "level"], "Logs the given message.", false),
        ],
    ));
    index.add_resource(resource(
        "suites/Resources.robot",
        "Resources",
        vec![
            keyword("Open Application", &["app"], "Starts the application.", false),
            keyword("Close Application", &[], "", false),
        ],
    ));
    index.add_resource(resource(
        "suites/Local.robot",
        "Local",
        vec![keyword("Helper", &[], "Test-local helper.", true)],
    ));
    index
}

/// Build an index from a JSON array of resources, in document order.
pub fn index_from_json(json: &str) -> anyhow::Result<KeywordIndex> {
    let resources: Vec<Resource> =
        serde_json::from_str(json).context("invalid keyword index fixture")?;
    let mut index = KeywordIndex::new();
    for resource in resources {
        index.add_resource(resource);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_index_shape() {
        let index = standard_index();
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("lib/BuiltIn.robot").unwrap().keywords.len(), 3);
        assert!(index.get("suites/Local.robot").unwrap().keywords[0].local);
    }

    #[test]
    fn test_index_from_json() {
        let index = index_from_json(
            r#"[
                { "resource_key": "lib/A.robot", "name": "A",
                  "keywords": [{ "name": "Do Thing", "arguments": ["x"] }] },
                { "resource_key": "lib/B.robot", "name": "B" }
            ]"#,
        )
        .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("lib/A.robot").unwrap().keywords[0].name, "Do Thing");
        assert!(index.get("lib/B.robot").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_index_from_json_rejects_garbage() {
        assert!(index_from_json("not json").is_err());
    }
}
