//! Documentation records: configuration properties, methods, and error codes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::list::OneOrMany;

/// A configuration property of the documented widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigProperty {
    pub name: String,

    /// Allowed type, or list of allowed types.
    #[serde(rename = "type")]
    pub types: OneOrMany<String>,

    /// Default value. Authored as a string, number, or boolean.
    #[serde(default, deserialize_with = "de_opt_stringish")]
    pub default: Option<String>,

    #[serde(rename = "desc")]
    pub description: OneOrMany<String>,

    /// Ids of examples demonstrating this property.
    #[serde(default, deserialize_with = "de_ids")]
    pub examples: OneOrMany<String>,
}

/// A public method of the documented widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Method {
    /// Method name, optionally carrying a parenthesized signature suffix,
    /// e.g. `resize(useAnimation)`.
    pub name: String,

    /// Ordered (type, description) pairs.
    #[serde(default)]
    pub args: Option<Vec<(String, String)>>,

    #[serde(rename = "desc")]
    pub description: OneOrMany<String>,

    #[serde(default, deserialize_with = "de_ids")]
    pub examples: OneOrMany<String>,

    /// Overloaded signatures share one canonical anchor; the extra rows are
    /// marked `noId` so only the first row carries the element id.
    #[serde(default, rename = "noId")]
    pub no_id: bool,
}

impl Method {
    /// Method identity: the name with any parenthesized signature stripped.
    pub fn anchor_name(&self) -> &str {
        self.name.split('(').next().unwrap_or(&self.name).trim_end()
    }
}

/// A documented error code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorRecord {
    #[serde(deserialize_with = "de_stringish")]
    pub id: String,

    #[serde(rename = "desc")]
    pub description: String,

    /// How to fix the error, when documented.
    #[serde(default)]
    pub fix: Option<OneOrMany<String>>,
}

/// An entry in a documentation table: a real record, or a bare string used as
/// a section separator in the authored data. Separators are skipped when
/// rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DocEntry<T> {
    Record(T),
    Separator(String),
}

impl<T> DocEntry<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Record(record) => Some(record),
            Self::Separator(_) => None,
        }
    }
}

/// The full set of documentation records for one widget.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocRecords {
    #[serde(default)]
    pub config: Vec<DocEntry<ConfigProperty>>,

    #[serde(default)]
    pub methods: Vec<DocEntry<Method>>,

    #[serde(default)]
    pub errors: Vec<DocEntry<ErrorRecord>>,
}

impl DocRecords {
    /// Parse documentation records from their JSON source text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Accept a string, number, or boolean and normalize it to a string.
fn de_stringish<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(stringish(Value::deserialize(deserializer)?))
}

fn de_opt_stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(stringish))
}

/// Example ids are authored as numbers or strings, scalar or list.
fn de_ids<'de, D>(deserializer: D) -> Result<OneOrMany<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => OneOrMany::Many(values.into_iter().map(stringish).collect()),
        scalar => OneOrMany::One(stringish(scalar)),
    })
}

fn stringish(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_config_property_with_scalar_fields() {
        let json = r#"{
            "name": "draggable",
            "type": "Boolean",
            "default": "false",
            "desc": "Allow pieces to be dragged.",
            "examples": 2000
        }"#;

        let prop: ConfigProperty = serde_json::from_str(json).unwrap();

        assert_eq!(prop.name, "draggable");
        assert_eq!(prop.types.iter().collect::<Vec<_>>(), vec!["Boolean"]);
        assert_eq!(prop.default.as_deref(), Some("false"));
        assert_eq!(prop.examples.iter().collect::<Vec<_>>(), vec!["2000"]);
    }

    #[test]
    fn parses_config_property_with_list_fields() {
        let json = r#"{
            "name": "position",
            "type": ["String", "Object"],
            "desc": ["First paragraph.", "Second paragraph."],
            "examples": [1001, "1002"]
        }"#;

        let prop: ConfigProperty = serde_json::from_str(json).unwrap();

        assert_eq!(prop.types.len(), 2);
        assert_eq!(prop.default, None);
        assert_eq!(prop.description.len(), 2);
        assert_eq!(
            prop.examples.iter().collect::<Vec<_>>(),
            vec!["1001", "1002"]
        );
    }

    #[test]
    fn numeric_default_is_normalized_to_text() {
        let json = r#"{"name": "moveSpeed", "type": "Number", "default": 200, "desc": "Speed."}"#;

        let prop: ConfigProperty = serde_json::from_str(json).unwrap();

        assert_eq!(prop.default.as_deref(), Some("200"));
    }

    #[test]
    fn method_anchor_strips_signature_suffix() {
        let json = r#"{"name": "resize(useAnimation)", "desc": "Recalculate sizes."}"#;

        let method: Method = serde_json::from_str(json).unwrap();

        assert_eq!(method.anchor_name(), "resize");
        assert!(!method.no_id);
        assert!(method.args.is_none());
    }

    #[test]
    fn method_without_suffix_keeps_full_name() {
        let json = r#"{"name": "clear", "desc": "Remove all pieces.", "noId": true}"#;

        let method: Method = serde_json::from_str(json).unwrap();

        assert_eq!(method.anchor_name(), "clear");
        assert!(method.no_id);
    }

    #[test]
    fn parses_method_args_as_pairs() {
        let json = r#"{
            "name": "move(from, to)",
            "args": [["String", "source square"], ["String", "target square"]],
            "desc": "Move a piece."
        }"#;

        let method: Method = serde_json::from_str(json).unwrap();
        let args = method.args.unwrap();

        assert_eq!(args.len(), 2);
        assert_eq!(args[0], ("String".to_string(), "source square".to_string()));
    }

    #[test]
    fn parses_error_record_with_numeric_id() {
        let json = r#"{"id": 1001, "desc": "Container not found.", "fix": "Check the id."}"#;

        let error: ErrorRecord = serde_json::from_str(json).unwrap();

        assert_eq!(error.id, "1001");
        assert_eq!(
            error.fix,
            Some(OneOrMany::One("Check the id.".to_string()))
        );
    }

    #[test]
    fn bare_strings_are_separators() {
        let json = r#"{
            "config": [
                "Board options",
                {"name": "draggable", "type": "Boolean", "desc": "Drag pieces."}
            ],
            "methods": [],
            "errors": ["Setup", {"id": "1001", "desc": "Container not found."}]
        }"#;

        let docs = DocRecords::from_json(json).unwrap();

        assert_eq!(docs.config.len(), 2);
        assert!(docs.config[0].record().is_none());
        assert_eq!(docs.config[1].record().unwrap().name, "draggable");
        assert_eq!(docs.errors.iter().filter_map(DocEntry::record).count(), 1);
    }
}
