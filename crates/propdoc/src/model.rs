//! Raw document model produced by the declaration extractor.
//!
//! Everything here is owned by a single extraction call for one source unit
//! and is not mutated once the extractor returns it.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Marker used as `base_type_name` for function-style components.
pub const FUNCTION_COMPONENT_MARKER: &str = "StatelessComponent";

/// Prop name to raw default-value source text, in property source order.
pub type DefaultValueMap = IndexMap<String, String>;

/// How a component-like declaration was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Function,
}

/// A class or function declaration that may define a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLikeDeclaration {
    /// Declared identifier.
    pub name: String,
    /// Declaration flavour.
    pub kind: DeclarationKind,
    /// Resolved base type (`React.Component`, `StatelessComponent`, ...).
    /// `None` when nothing recognizable was found.
    pub base_type_name: Option<String>,
    /// Name of the declaration describing the component's props.
    pub prop_shape_name: Option<String>,
    /// Documentation comment text, empty when absent.
    pub comment: String,
}

/// An interface or object type alias describing configurable properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropShapeDeclaration {
    pub name: String,
    /// Members in declaration order, own members before inherited ones.
    pub members: Vec<PropMember>,
    pub comment: String,
}

/// A single property of a prop shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropMember {
    pub name: String,
    /// Declared type text, or `string` / `array` for unions.
    pub raw_type_text: String,
    /// Textual alternatives when the declared type is a union.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<Vec<String>>,
    pub is_required: bool,
    pub comment: String,
}

/// Non-fatal conditions recorded while extracting or assembling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The selected component names a prop shape that is not declared.
    UnresolvedPropShape {
        component: String,
        expected: Option<String>,
    },
    /// No declaration in the unit qualifies as a component.
    NoComponentFound,
    /// A default-properties initializer (or one of its entries) could not be read.
    MalformedDefaultProperties {
        owner: String,
        property: Option<String>,
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedPropShape {
                component,
                expected,
            } => match expected {
                Some(expected) => write!(
                    f,
                    "props type is not exported: `{component}` expects `{expected}`"
                ),
                None => write!(f, "props type is not exported: `{component}` names none"),
            },
            Self::NoComponentFound => f.write_str("no component declaration found"),
            Self::MalformedDefaultProperties {
                owner,
                property,
                reason,
            } => match property {
                Some(property) => {
                    write!(f, "ignoring default for `{owner}.{property}`: {reason}")
                }
                None => write!(f, "ignoring defaultProps of `{owner}`: {reason}"),
            },
        }
    }
}

/// Everything the declaration extractor learned about one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawDocument {
    /// Component-like declarations in traversal order.
    pub class_likes: Vec<ClassLikeDeclaration>,
    /// Prop shapes, unique by name.
    pub prop_shapes: Vec<PropShapeDeclaration>,
    /// Defaults gathered from every default-properties object in the unit.
    pub default_values: DefaultValueMap,
    /// Non-fatal conditions hit during extraction.
    pub diagnostics: Vec<Diagnostic>,
}

impl RawDocument {
    /// Records a prop shape. A later declaration with the same name replaces
    /// the earlier one.
    pub fn insert_prop_shape(&mut self, shape: PropShapeDeclaration) {
        if let Some(index) = self.prop_shapes.iter().position(|s| s.name == shape.name) {
            tracing::debug!(name = %shape.name, "replacing duplicate prop shape");
            self.prop_shapes.remove(index);
        }
        self.prop_shapes.push(shape);
    }

    /// Looks up a prop shape by name.
    pub fn prop_shape(&self, name: &str) -> Option<&PropShapeDeclaration> {
        self.prop_shapes.iter().find(|shape| shape.name == name)
    }

    /// Merges defaults into the unit-wide map; later keys win.
    pub fn merge_defaults(&mut self, defaults: DefaultValueMap) {
        for (name, value) in defaults {
            self.default_values.insert(name, value);
        }
    }

    /// Records a diagnostic and logs it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(name: &str, member: &str) -> PropShapeDeclaration {
        PropShapeDeclaration {
            name: name.to_string(),
            members: vec![PropMember {
                name: member.to_string(),
                raw_type_text: "string".to_string(),
                value_set: None,
                is_required: true,
                comment: String::new(),
            }],
            comment: String::new(),
        }
    }

    #[test]
    fn last_prop_shape_with_same_name_wins() {
        let mut doc = RawDocument::default();
        doc.insert_prop_shape(shape("Props", "first"));
        doc.insert_prop_shape(shape("Other", "x"));
        doc.insert_prop_shape(shape("Props", "second"));

        assert_eq!(doc.prop_shapes.len(), 2);
        let props = doc.prop_shape("Props").expect("shape present");
        assert_eq!(props.members[0].name, "second");
    }

    #[test]
    fn merged_defaults_overwrite_in_place() {
        let mut doc = RawDocument::default();
        let mut first = DefaultValueMap::new();
        first.insert("a".to_string(), "1".to_string());
        first.insert("b".to_string(), "2".to_string());
        doc.merge_defaults(first);

        let mut second = DefaultValueMap::new();
        second.insert("a".to_string(), "3".to_string());
        doc.merge_defaults(second);

        let entries: Vec<_> = doc.default_values.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(doc.default_values["a"], "3");
    }

    #[test]
    fn diagnostic_messages_are_readable() {
        let diagnostic = Diagnostic::UnresolvedPropShape {
            component: "Button".to_string(),
            expected: Some("ButtonProps".to_string()),
        };
        assert_eq!(
            diagnostic.to_string(),
            "props type is not exported: `Button` expects `ButtonProps`"
        );
    }
}
