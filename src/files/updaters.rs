use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::path::Path;

use crate::domain::Version;
use crate::error::{DeployError, Result};
use crate::files::FileStore;

/// A version string embedded in source text.
///
/// The regex must have two capture groups around the `X.Y.Z` part: the text
/// before the version (including the opening quote) and the closing character.
/// Both are written back unchanged.
#[derive(Debug, Clone)]
pub struct VersionMarker {
    regex: Regex,
}

impl VersionMarker {
    /// Build a marker from a pattern with two capture groups
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| DeployError::config(format!("Invalid marker '{}': {}", pattern, e)))?;
        if regex.captures_len() < 3 {
            return Err(DeployError::config(format!(
                "Marker '{}' needs two capture groups",
                pattern
            )));
        }
        Ok(VersionMarker { regex })
    }

    /// `VERSION: '3.26.4'` in the library source
    pub fn library() -> Result<Self> {
        Self::new(r"(VERSION: .)\d+\.\d+\.\d+(.)")
    }

    /// `sentry_client: 'raven-js/3.26.4'` in the test source
    pub fn test_client() -> Result<Self> {
        Self::new(r"(sentry_client: .raven-js/)\d+\.\d+\.\d+(.)")
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Replace every marker in `text`, returning the new text and the match count
    pub fn apply(&self, text: &str, next: &Version) -> (String, usize) {
        let count = self.regex.find_iter(text).count();
        let replaced = self.regex.replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], next, &caps[2])
        });
        (replaced.into_owned(), count)
    }
}

fn load_object(store: &dyn FileStore, path: &Path) -> Result<Map<String, Value>> {
    let content = store.read(path)?;
    let doc: Value = serde_json::from_str(&content)?;
    match doc {
        Value::Object(map) => Ok(map),
        _ => Err(DeployError::manifest(format!(
            "{} is not a JSON object",
            path.display()
        ))),
    }
}

fn save_object(store: &dyn FileStore, path: &Path, doc: Map<String, Value>) -> Result<()> {
    let mut formatted = serde_json::to_string_pretty(&Value::Object(doc))?;
    formatted.push('\n');
    store.write(path, &formatted)
}

/// Read and parse the `version` field of a JSON manifest.
pub fn read_manifest_version(store: &dyn FileStore, path: &Path) -> Result<Version> {
    let doc = load_object(store, path)?;
    let raw = doc.get("version").and_then(Value::as_str).ok_or_else(|| {
        DeployError::manifest(format!("{} has no string 'version' field", path.display()))
    })?;
    Version::parse(raw)
}

/// Set the `version` field of a JSON manifest.
///
/// Other keys keep their values and order. The file is written with 2-space
/// indentation and a trailing newline.
///
/// # Returns
/// * `Ok(Some(previous))` - The `version` value before the update, if it was a string
/// * `Ok(None)` - If the manifest had no string `version`
pub fn update_manifest_version(
    store: &dyn FileStore,
    path: &Path,
    next: &Version,
) -> Result<Option<String>> {
    let mut doc = load_object(store, path)?;
    let previous = doc
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string);
    doc.insert("version".to_string(), Value::String(next.to_string()));
    save_object(store, path, doc)?;
    Ok(previous)
}

/// Set `vars.<key>` in the docs config, creating `vars` when absent.
pub fn update_docs_version(
    store: &dyn FileStore,
    path: &Path,
    key: &str,
    next: &Version,
) -> Result<()> {
    let mut doc = load_object(store, path)?;
    let vars = doc
        .entry("vars")
        .or_insert_with(|| Value::Object(Map::new()));
    let vars = vars.as_object_mut().ok_or_else(|| {
        DeployError::manifest(format!("'vars' in {} is not an object", path.display()))
    })?;
    vars.insert(key.to_string(), Value::String(next.to_string()));
    save_object(store, path, doc)
}

/// Rewrite every occurrence of `marker` in a text file.
///
/// The file is only written when at least one marker was found.
///
/// # Returns
/// Number of markers replaced
pub fn replace_version_markers(
    store: &dyn FileStore,
    path: &Path,
    marker: &VersionMarker,
    next: &Version,
) -> Result<usize> {
    let content = store.read(path)?;
    let (updated, count) = marker.apply(&content, next);
    if count > 0 {
        store.write(path, &updated)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::MemoryStore;

    const PACKAGE_JSON: &str = r#"{
  "name": "raven-js",
  "version": "3.26.4",
  "license": "BSD-2-Clause",
  "main": "src/singleton.js",
  "devDependencies": {
    "grunt": "^0.4.5"
  },
  "files": []
}
"#;

    #[test]
    fn test_read_manifest_version() {
        let mut store = MemoryStore::new();
        store.insert("package.json", PACKAGE_JSON);

        let version = read_manifest_version(&store, Path::new("package.json")).unwrap();
        assert_eq!(version, Version::new(3, 26, 4));
    }

    #[test]
    fn test_read_manifest_version_missing_field() {
        let mut store = MemoryStore::new();
        store.insert("package.json", r#"{"name": "raven-js"}"#);

        let err = read_manifest_version(&store, Path::new("package.json")).unwrap_err();
        assert!(matches!(err, DeployError::Manifest(_)));
    }

    #[test]
    fn test_update_manifest_preserves_layout() {
        let mut store = MemoryStore::new();
        store.insert("package.json", PACKAGE_JSON);

        let previous =
            update_manifest_version(&store, Path::new("package.json"), &Version::new(2, 5, 0))
                .unwrap();

        assert_eq!(previous.as_deref(), Some("3.26.4"));
        assert_eq!(
            store.get("package.json").unwrap(),
            PACKAGE_JSON.replace("3.26.4", "2.5.0")
        );
    }

    #[test]
    fn test_update_manifest_rejects_non_object() {
        let mut store = MemoryStore::new();
        store.insert("bower.json", "[1, 2, 3]");

        let err = update_manifest_version(&store, Path::new("bower.json"), &Version::new(1, 0, 0))
            .unwrap_err();
        assert!(matches!(err, DeployError::Manifest(_)));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_update_docs_version_only_touches_key() {
        let mut store = MemoryStore::new();
        store.insert(
            "docs.json",
            r#"{"name": "raven-js", "vars": {"RAVEN_VERSION": "3.26.4", "OTHER": "x"}}"#,
        );

        update_docs_version(
            &store,
            Path::new("docs.json"),
            "RAVEN_VERSION",
            &Version::new(3, 27, 4),
        )
        .unwrap();

        let expected = r#"{
  "name": "raven-js",
  "vars": {
    "RAVEN_VERSION": "3.27.4",
    "OTHER": "x"
  }
}
"#;
        assert_eq!(store.get("docs.json").unwrap(), expected);
    }

    #[test]
    fn test_update_docs_version_creates_vars() {
        let mut store = MemoryStore::new();
        store.insert("docs.json", r#"{"name": "raven-js"}"#);

        update_docs_version(&store, Path::new("docs.json"), "RAVEN_VERSION", &Version::new(1, 0, 1))
            .unwrap();

        let doc: Value = serde_json::from_str(&store.get("docs.json").unwrap()).unwrap();
        assert_eq!(doc["vars"]["RAVEN_VERSION"], "1.0.1");
    }

    #[test]
    fn test_update_docs_version_vars_not_object() {
        let mut store = MemoryStore::new();
        store.insert("docs.json", r#"{"vars": "nope"}"#);

        let result =
            update_docs_version(&store, Path::new("docs.json"), "RAVEN_VERSION", &Version::new(1, 0, 1));
        assert!(matches!(result, Err(DeployError::Manifest(_))));
    }

    #[test]
    fn test_library_marker_replacement() {
        let mut store = MemoryStore::new();
        let source = "var Raven = {\n  VERSION: '1.0.0',\n  other: '1.0.0'\n};\n";
        store.insert("src/raven.js", source);

        let marker = VersionMarker::library().unwrap();
        let count =
            replace_version_markers(&store, Path::new("src/raven.js"), &marker, &Version::new(1, 0, 1))
                .unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            store.get("src/raven.js").unwrap(),
            "var Raven = {\n  VERSION: '1.0.1',\n  other: '1.0.0'\n};\n"
        );
    }

    #[test]
    fn test_library_marker_keeps_quote_style() {
        let marker = VersionMarker::library().unwrap();
        let (text, count) = marker.apply(r#"VERSION: "0.9.9","#, &Version::new(1, 0, 0));
        assert_eq!(count, 1);
        assert_eq!(text, r#"VERSION: "1.0.0","#);
    }

    #[test]
    fn test_test_client_marker_replaces_all() {
        let marker = VersionMarker::test_client().unwrap();
        let source = "sentry_client: 'raven-js/3.26.4',\nfoo();\nsentry_client: 'raven-js/3.26.4'\n";
        let (text, count) = marker.apply(source, &Version::new(3, 26, 5));

        assert_eq!(count, 2);
        assert_eq!(
            text,
            "sentry_client: 'raven-js/3.26.5',\nfoo();\nsentry_client: 'raven-js/3.26.5'\n"
        );
    }

    #[test]
    fn test_marker_without_match_leaves_file_alone() {
        let mut store = MemoryStore::new();
        store.insert("test/raven.test.js", "describe('Raven');\n");

        let marker = VersionMarker::test_client().unwrap();
        let count = replace_version_markers(
            &store,
            Path::new("test/raven.test.js"),
            &marker,
            &Version::new(1, 0, 0),
        )
        .unwrap();

        assert_eq!(count, 0);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_marker_requires_capture_groups() {
        assert!(VersionMarker::new(r"\d+\.\d+\.\d+").is_err());
        assert!(VersionMarker::new(r"(unclosed").is_err());
    }
}
