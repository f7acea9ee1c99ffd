//
// paths.rs
//
// Resource-key normalization and base-name derivation
//

use std::path::Path;

/// Lexically normalize a resource key.
///
/// Resource keys are path-shaped identifiers. Normalization unifies
/// separators to `/`, drops empty and `.` segments, and collapses `..`
/// against a preceding segment. Purely textual: the filesystem is never
/// consulted, and the same input always yields the same key.
///
/// An empty input normalizes to `"."`, matching the lexical normalization
/// the suggestion engine was originally built against.
pub fn normalize_key(key: &str) -> String {
    let unified = key.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else if !(absolute && segments.is_empty()) {
                    // `..` at the root of an absolute path has nowhere to go
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Base name of a resource key: the final path segment without its
/// extension (`"suites/Local.robot"` → `"Local"`).
///
/// Expects a normalized key (separator `/`). Returns an empty string when
/// the key has no file name component.
pub fn base_name(key: &str) -> &str {
    Path::new(key)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("")
}
