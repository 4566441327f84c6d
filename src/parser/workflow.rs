// ABOUTME: Parsed workflow document and file loading
// ABOUTME: Wraps the raw YAML tree and exposes the keys the validator inspects

use serde_yaml::{Mapping, Value};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::error::{ParserError, Result};

/// A parsed workflow file.
///
/// The tree is kept untyped: a workflow that is missing fields or has them in
/// the wrong shape still parses, and the validator reports on what it finds.
/// Anything other than a mapping at the top level behaves as if it had no keys.
#[derive(Debug, Clone)]
pub struct WorkflowDocument {
    root: Value,
}

impl WorkflowDocument {
    /// Parse a workflow from YAML text. A leading byte-order mark is ignored.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let root: Value =
            serde_yaml::from_str(strip_bom(content)).map_err(ParserError::YamlError)?;
        Ok(Self { root })
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        self.root.as_mapping()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether the trigger key is present.
    ///
    /// YAML 1.1 loaders read a bare `on` as the boolean `true`, so both keys count.
    pub fn has_trigger(&self) -> bool {
        self.as_mapping().is_some_and(|map| {
            map.contains_key("on") || map.contains_key(&Value::Bool(true))
        })
    }

    /// Trigger configuration, preferring a non-null `on` over a `true` key
    pub fn trigger(&self) -> Option<&Value> {
        let map = self.as_mapping()?;
        let on = map.get("on");
        match on {
            Some(value) if !value.is_null() => Some(value),
            _ => map.get(&Value::Bool(true)).or(on),
        }
    }

    pub fn jobs(&self) -> Option<&Value> {
        self.get("jobs")
    }

    /// Top-level keys in document order
    pub fn top_level_keys(&self) -> Vec<String> {
        self.as_mapping()
            .map(|map| map.keys().map(key_label).collect())
            .unwrap_or_default()
    }
}

/// serde_yaml reads a leading U+FEFF as the start of a second document
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Render a mapping key for messages
pub fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowParser;

impl WorkflowParser {
    pub fn new() -> Self {
        Self
    }

    /// Read a workflow file as UTF-8 text
    pub async fn read_source<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reading workflow file: {}", path.display());
        let content = fs::read_to_string(path).await.map_err(ParserError::IoError)?;
        match content.strip_prefix('\u{feff}') {
            Some(stripped) => Ok(stripped.to_string()),
            None => Ok(content),
        }
    }

    pub async fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<WorkflowDocument> {
        let content = self.read_source(path).await?;
        self.parse_string(&content)
    }

    pub fn parse_string(&self, content: &str) -> Result<WorkflowDocument> {
        WorkflowDocument::from_yaml(content)
    }
}

impl Default for WorkflowParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_workflow() {
        let yaml = r#"
name: CI
on:
  push:
    branches: [main]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
"#;

        let doc = WorkflowDocument::from_yaml(yaml).unwrap();
        assert_eq!(doc.get("name").and_then(Value::as_str), Some("CI"));
        assert!(doc.has_trigger());
        assert!(doc.jobs().unwrap().is_mapping());
        assert_eq!(doc.top_level_keys(), vec!["name", "on", "jobs"]);
    }

    #[test]
    fn test_boolean_trigger_key() {
        let yaml = r#"
name: legacy
true:
  workflow_dispatch: {}
jobs: {}
"#;

        let doc = WorkflowDocument::from_yaml(yaml).unwrap();
        assert!(doc.has_trigger());
        assert!(doc
            .trigger()
            .and_then(Value::as_mapping)
            .is_some_and(|t| t.contains_key("workflow_dispatch")));
        assert_eq!(doc.top_level_keys(), vec!["name", "true", "jobs"]);
    }

    #[test]
    fn test_null_on_falls_back_to_boolean_key() {
        let yaml = "on:\ntrue: [push]\n";

        let doc = WorkflowDocument::from_yaml(yaml).unwrap();
        assert!(doc.trigger().unwrap().is_sequence());
    }

    #[test]
    fn test_non_mapping_document_has_no_keys() {
        let doc = WorkflowDocument::from_yaml("- name\n- on\n").unwrap();
        assert!(!doc.contains_key("name"));
        assert!(!doc.has_trigger());
        assert!(doc.top_level_keys().is_empty());

        let doc = WorkflowDocument::from_yaml("just a string").unwrap();
        assert!(doc.as_mapping().is_none());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = WorkflowDocument::from_yaml("jobs: [unclosed\n");
        assert!(matches!(result, Err(ParserError::YamlError(_))));
    }

    #[tokio::test]
    async fn test_parse_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"name: from-file\non: push\njobs: {}\n")
            .unwrap();

        let doc = WorkflowParser::new()
            .parse_file(temp_file.path())
            .await
            .unwrap();
        assert_eq!(doc.get("on").and_then(Value::as_str), Some("push"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let result = WorkflowParser::new()
            .read_source("/definitely/not/here.yml")
            .await;
        assert!(matches!(result, Err(ParserError::IoError(_))));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let doc = WorkflowDocument::from_yaml("\u{feff}name: a\non: push\njobs: {}\n").unwrap();
        assert_eq!(doc.top_level_keys(), vec!["name", "on", "jobs"]);
        assert_eq!(strip_bom("\u{feff}\u{feff}x"), "\u{feff}x");
    }

    #[tokio::test]
    async fn test_read_source_strips_byte_order_mark() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"\xef\xbb\xbfname: bom\n").unwrap();

        let content = WorkflowParser::new()
            .read_source(temp_file.path())
            .await
            .unwrap();
        assert_eq!(content, "name: bom\n");
    }

    #[test]
    fn test_key_label() {
        assert_eq!(key_label(&Value::Bool(true)), "true");
        assert_eq!(key_label(&Value::String("build".into())), "build");
        assert_eq!(key_label(&Value::Number(3.into())), "3");
    }
}
