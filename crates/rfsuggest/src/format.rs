//
// format.rs
//
// Suggestion shapes and construction of their display fields
//

use serde::Serialize;

use crate::config::SuggestionConfig;
use crate::keyword_index::{Keyword, Resource};

/// One ranked, formatted completion candidate.
///
/// Serializes to the wire shape consumed by editor layers: a `type`
/// discriminant (`"import"` or `"keyword"`) plus camelCase fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Suggestion {
    /// A resource display name offered for an import statement.
    #[serde(rename = "import", rename_all = "camelCase")]
    Import {
        text: String,
        display_text: String,
        replacement_prefix: String,
    },
    /// A keyword completion with snippet and documentation excerpt.
    #[serde(rename = "keyword", rename_all = "camelCase")]
    Keyword {
        name: String,
        local: bool,
        snippet: String,
        display_text: String,
        left_label: String,
        right_label: String,
        description: String,
        replacement_prefix: String,
        resource_key: String,
        keyword: Keyword,
    },
}

impl Suggestion {
    pub fn display_text(&self) -> &str {
        match self {
            Suggestion::Import { display_text, .. } => display_text,
            Suggestion::Keyword { display_text, .. } => display_text,
        }
    }

    pub fn is_import(&self) -> bool {
        matches!(self, Suggestion::Import { .. })
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Suggestion::Keyword { .. })
    }
}

/// Build the keyword-kind suggestion for one ranked keyword.
///
/// `dot_notation` controls the replacement prefix: a scoped query replaces
/// nothing (the editor keeps the typed library name), an unscoped query
/// replaces the original typed prefix as-is.
pub(crate) fn keyword_suggestion(
    keyword: &Keyword,
    resource: &Resource,
    dot_notation: bool,
    prefix: &str,
    config: &SuggestionConfig,
) -> Suggestion {
    Suggestion::Keyword {
        name: keyword.name.clone(),
        local: keyword.local,
        snippet: snippet(keyword),
        display_text: display_text(keyword, config),
        left_label: left_label(keyword),
        right_label: right_label(resource),
        description: description(keyword),
        replacement_prefix: if dot_notation {
            String::new()
        } else {
            prefix.to_string()
        },
        resource_key: resource.resource_key.clone(),
        keyword: keyword.clone(),
    }
}

/// Snippet text: the keyword name followed by one numbered tab stop per
/// argument, each separated by a four-space cell separator.
///
/// The `${N:label}` placeholder syntax and the four-space separator are a
/// fixed wire format: consuming editors expand the tab stops, and the
/// dialect treats runs of four spaces as argument cell boundaries.
fn snippet(keyword: &Keyword) -> String {
    let mut text = keyword.name.clone();
    for (i, argument) in keyword.arguments.iter().enumerate() {
        text.push_str(&format!("    ${{{}:{}}}", i + 1, argument));
    }
    text
}

/// Display text: the keyword name, with the argument list appended when
/// `show_arguments` is enabled and there are arguments to show.
fn display_text(keyword: &Keyword, config: &SuggestionConfig) -> String {
    if config.show_arguments && !keyword.arguments.is_empty() {
        format!("{} - {}", keyword.name, arguments_string(keyword))
    } else {
        keyword.name.clone()
    }
}

// Reserved for future use.
fn left_label(_keyword: &Keyword) -> String {
    String::new()
}

fn right_label(resource: &Resource) -> String {
    resource.name.clone()
}

/// Description: the first non-empty documentation line (trimmed, with a
/// trailing period ensured) followed by the argument list.
fn description(keyword: &Keyword) -> String {
    let first_line = keyword
        .documentation
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    let summary = if first_line.is_empty() || first_line.ends_with('.') {
        first_line.to_string()
    } else {
        format!("{first_line}.")
    };
    format!("{} Arguments: {}", summary, arguments_string(keyword))
}

fn arguments_string(keyword: &Keyword) -> String {
    keyword.arguments.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixture_index::{keyword, resource};

    #[test]
    fn test_snippet_numbers_tab_stops_from_one() {
        let kw = keyword("Run Keyword", &["name", "timeout"], "", false);
        assert_eq!(
            snippet(&kw),
            "Run Keyword    ${1:name}    ${2:timeout}"
        );
    }

    #[test]
    fn test_snippet_without_arguments_is_just_the_name() {
        let kw = keyword("Helper", &[], "", false);
        assert_eq!(snippet(&kw), "Helper");
    }

    #[test]
    fn test_display_text_plain_by_default() {
        let kw = keyword("Run Keyword", &["name"], "", false);
        let config = SuggestionConfig::default();
        assert_eq!(display_text(&kw, &config), "Run Keyword");
    }

    #[test]
    fn test_display_text_with_arguments() {
        let kw = keyword("Run Keyword", &["name", "timeout"], "", false);
        let config = SuggestionConfig {
            show_arguments: true,
            ..Default::default()
        };
        assert_eq!(display_text(&kw, &config), "Run Keyword - name, timeout");
    }

    #[test]
    fn test_display_text_show_arguments_without_arguments() {
        let kw = keyword("Helper", &[], "", false);
        let config = SuggestionConfig {
            show_arguments: true,
            ..Default::default()
        };
        assert_eq!(display_text(&kw, &config), "Helper");
    }

    #[test]
    fn test_description_appends_missing_period() {
        let kw = keyword("Run Keyword", &["name"], "Runs stuff", false);
        assert_eq!(description(&kw), "Runs stuff. Arguments: name");
    }

    #[test]
    fn test_description_keeps_existing_period() {
        let kw = keyword("Run Keyword", &["name"], "Runs stuff.", false);
        assert_eq!(description(&kw), "Runs stuff. Arguments: name");
    }

    #[test]
    fn test_description_uses_first_non_empty_line() {
        let kw = keyword(
            "Run Keyword",
            &["a", "b"],
            "\n\n  Runs the named keyword  \nSecond paragraph.",
            false,
        );
        assert_eq!(
            description(&kw),
            "Runs the named keyword. Arguments: a, b"
        );
    }

    #[test]
    fn test_description_with_empty_documentation() {
        let kw = keyword("Helper", &["x"], "", false);
        assert_eq!(description(&kw), " Arguments: x");
    }

    #[test]
    fn test_keyword_suggestion_fields() {
        let res = resource("lib/BuiltIn.robot", "BuiltIn", vec![]);
        let kw = keyword("Run Keyword", &["name"], "Runs stuff", false);
        let config = SuggestionConfig::default();
        let suggestion = keyword_suggestion(&kw, &res, false, "run", &config);
        match suggestion {
            Suggestion::Keyword {
                name,
                local,
                left_label,
                right_label,
                replacement_prefix,
                resource_key,
                ..
            } => {
                assert_eq!(name, "Run Keyword");
                assert!(!local);
                assert_eq!(left_label, "");
                assert_eq!(right_label, "BuiltIn");
                assert_eq!(replacement_prefix, "run");
                assert_eq!(resource_key, "lib/BuiltIn.robot");
            }
            Suggestion::Import { .. } => panic!("expected keyword suggestion"),
        }
    }

    #[test]
    fn test_scoped_query_replaces_nothing() {
        let res = resource("lib/BuiltIn.robot", "BuiltIn", vec![]);
        let kw = keyword("Run Keyword", &[], "", false);
        let config = SuggestionConfig::default();
        let suggestion = keyword_suggestion(&kw, &res, true, "builtin.run", &config);
        match suggestion {
            Suggestion::Keyword {
                replacement_prefix, ..
            } => assert_eq!(replacement_prefix, ""),
            Suggestion::Import { .. } => panic!("expected keyword suggestion"),
        }
    }

    #[test]
    fn test_import_serializes_with_type_tag() {
        let suggestion = Suggestion::Import {
            text: "BuiltIn".to_string(),
            display_text: "BuiltIn".to_string(),
            replacement_prefix: "buil".to_string(),
        };
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["type"], "import");
        assert_eq!(value["displayText"], "BuiltIn");
        assert_eq!(value["replacementPrefix"], "buil");
    }

    #[test]
    fn test_keyword_serializes_with_camel_case_fields() {
        let res = resource("lib/BuiltIn.robot", "BuiltIn", vec![]);
        let kw = keyword("Run Keyword", &["name"], "Runs stuff", false);
        let config = SuggestionConfig::default();
        let value =
            serde_json::to_value(keyword_suggestion(&kw, &res, false, "run", &config)).unwrap();
        assert_eq!(value["type"], "keyword");
        assert_eq!(value["leftLabel"], "");
        assert_eq!(value["rightLabel"], "BuiltIn");
        assert_eq!(value["resourceKey"], "lib/BuiltIn.robot");
        assert_eq!(value["description"], "Runs stuff. Arguments: name");
        assert_eq!(value["keyword"]["name"], "Run Keyword");
    }
}
