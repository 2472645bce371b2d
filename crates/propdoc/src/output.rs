//! Output schema consumed by documentation renderers.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Assembled documentation for one component.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub description: String,
    /// Props keyed by name, in declaration order.
    pub props: IndexMap<String, OutputProp>,
}

/// Documentation for a single prop.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputProp {
    pub description: String,
    #[serde(rename = "type")]
    pub prop_type: PropType,
    pub required: bool,
    /// Serialised as `null` when no default was declared.
    pub default_value: Option<DefaultValue>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PropType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl PropType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DefaultValue {
    pub value: String,
    /// Always `false`: defaults are captured as text, never evaluated.
    pub computed: bool,
}

impl DefaultValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            computed: false,
        }
    }
}

/// Result of assembling one source unit.
///
/// The two "nothing found" shapes exist side by side: [`Docgen::Empty`]
/// serialises as `{}` and [`Docgen::Absent`] as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Docgen {
    Document(OutputDocument),
    Empty,
    Absent,
}

impl Docgen {
    /// Returns the document when one was produced.
    pub fn document(&self) -> Option<&OutputDocument> {
        match self {
            Self::Document(document) => Some(document),
            Self::Empty | Self::Absent => None,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }
}

impl Serialize for Docgen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Document(document) => document.serialize(serializer),
            Self::Empty => serializer.serialize_map(Some(0))?.end(),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_serializes_as_null() {
        let prop = OutputProp {
            description: String::new(),
            prop_type: PropType::named("string"),
            required: true,
            default_value: None,
        };
        let value = serde_json::to_value(&prop).expect("serializable");
        assert!(value["defaultValue"].is_null());
        assert!(value.as_object().expect("object").contains_key("defaultValue"));
        assert!(value["type"].get("value").is_none());
    }

    #[test]
    fn empty_and_absent_serialize_differently() {
        assert_eq!(serde_json::to_string(&Docgen::Empty).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&Docgen::Absent).unwrap(), "null");
    }

    #[test]
    fn display_name_is_omitted_when_unset() {
        let document = OutputDocument {
            display_name: None,
            description: "General component description.".to_string(),
            props: IndexMap::new(),
        };
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            r#"{"description":"General component description.","props":{}}"#
        );
    }
}
