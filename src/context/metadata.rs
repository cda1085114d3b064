//! Module metadata (`metadata.json`).
//!
//! Metadata is kept as a generic JSON object. Accessors return `Option`
//! so a missing field is always handled by the caller.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApprovalError, Result};

/// Parsed `metadata.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleMetadata {
    fields: Map<String, Value>,
}

/// One entry of the `requirements` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Requirement {
    /// Requirement name, e.g. `puppet` or `pe`.
    #[serde(default)]
    pub name: Option<String>,
    /// Version constraint, e.g. `>= 3.0.0 < 5.0.0`.
    #[serde(default)]
    pub version_requirement: Option<String>,
}

impl ModuleMetadata {
    /// Parse metadata text. The top level must be a JSON object.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let parse_error = |message: String| ApprovalError::MetadataParse {
            path: path.to_path_buf(),
            message,
        };

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            Ok(other) => Err(parse_error(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
            Err(e) => Err(parse_error(e.to_string())),
        }
    }

    /// Raw value of a top-level field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether a field is present and non-empty.
    ///
    /// `null`, `""`, `[]` and `{}` count as empty.
    pub fn has_value(&self, name: &str) -> bool {
        match self.field(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
        }
    }

    /// A top-level field as a string, if it is one.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// The module name.
    pub fn name(&self) -> Option<&str> {
        self.string("name")
    }

    /// The module version string.
    pub fn version(&self) -> Option<&str> {
        self.string("version")
    }

    /// The declared license identifier.
    pub fn license(&self) -> Option<&str> {
        self.string("license")
    }

    /// The `requirements` list.
    ///
    /// Empty when the field is absent or not a list; entries that are not
    /// objects are skipped.
    pub fn requirements(&self) -> Vec<Requirement> {
        self.field("requirements")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| Requirement::deserialize(entry).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ModuleMetadata {
        ModuleMetadata::parse(text, Path::new("metadata.json")).unwrap()
    }

    #[test]
    fn parses_object() {
        let metadata = parse(r#"{"name": "puppetlabs-ntp", "version": "4.1.0"}"#);
        assert_eq!(metadata.name(), Some("puppetlabs-ntp"));
        assert_eq!(metadata.version(), Some("4.1.0"));
        assert_eq!(metadata.license(), None);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ModuleMetadata::parse("{ not json", Path::new("/m/metadata.json")).unwrap_err();
        assert!(matches!(err, ApprovalError::MetadataParse { .. }));
        assert!(err.to_string().contains("/m/metadata.json"));
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = ModuleMetadata::parse("[1, 2]", Path::new("metadata.json")).unwrap_err();
        assert!(err.to_string().contains("found an array"));
    }

    #[test]
    fn has_value_treats_empty_values_as_missing() {
        let metadata = parse(
            r#"{
                "name": "",
                "author": "   ",
                "summary": null,
                "operatingsystem_support": [],
                "source": {},
                "version": "1.0.0",
                "project_page": {"url": "x"},
                "issues_url": ["x"]
            }"#,
        );
        assert!(!metadata.has_value("name"));
        assert!(!metadata.has_value("author"));
        assert!(!metadata.has_value("summary"));
        assert!(!metadata.has_value("operatingsystem_support"));
        assert!(!metadata.has_value("source"));
        assert!(!metadata.has_value("license"));
        assert!(metadata.has_value("version"));
        assert!(metadata.has_value("project_page"));
        assert!(metadata.has_value("issues_url"));
    }

    #[test]
    fn non_string_version_is_not_a_string() {
        let metadata = parse(r#"{"version": 1}"#);
        assert!(metadata.has_value("version"));
        assert_eq!(metadata.version(), None);
    }

    #[test]
    fn requirements_are_parsed_in_order() {
        let metadata = parse(
            r#"{"requirements": [
                {"name": "puppet", "version_requirement": ">= 3.0.0"},
                {"name": "pe"}
            ]}"#,
        );
        let requirements = metadata.requirements();
        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0].name.as_deref(), Some("puppet"));
        assert_eq!(
            requirements[0].version_requirement.as_deref(),
            Some(">= 3.0.0")
        );
        assert_eq!(requirements[1].version_requirement, None);
    }

    #[test]
    fn missing_or_malformed_requirements_are_empty() {
        assert!(parse("{}").requirements().is_empty());
        assert!(parse(r#"{"requirements": []}"#).requirements().is_empty());
        assert!(parse(r#"{"requirements": "puppet"}"#)
            .requirements()
            .is_empty());
        assert!(parse(r#"{"requirements": [42]}"#).requirements().is_empty());
    }
}
