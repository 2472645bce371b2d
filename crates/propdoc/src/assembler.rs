//! Turns the raw document model into the output schema.

use indexmap::IndexMap;
use serde_json::json;

use crate::model::{ClassLikeDeclaration, DefaultValueMap, Diagnostic, PropMember, RawDocument};
use crate::options::{DocgenOptions, OutputVariant};
use crate::output::{DefaultValue, Docgen, OutputDocument, OutputProp, PropType};

/// Which component-like declarations of a unit get documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// The first recognized component in traversal order; one per file.
    FirstComponent,
}

/// Policy applied by [`DocumentAssembler`].
pub const SELECTION_POLICY: SelectionPolicy = SelectionPolicy::FirstComponent;

/// Assembled document plus every diagnostic from extraction and assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub docgen: Docgen,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy)]
pub struct DocumentAssembler<'o> {
    options: &'o DocgenOptions,
}

impl<'o> DocumentAssembler<'o> {
    pub fn new(options: &'o DocgenOptions) -> Self {
        Self { options }
    }

    pub fn assemble(&self, raw: &RawDocument) -> Assembly {
        let mut diagnostics = raw.diagnostics.clone();

        let Some(component) = self.select_component(raw) else {
            tracing::debug!("no component declaration found");
            diagnostics.push(Diagnostic::NoComponentFound);
            return Assembly {
                docgen: self.nothing_found(),
                diagnostics,
            };
        };

        let shape = component
            .prop_shape_name
            .as_deref()
            .and_then(|name| raw.prop_shape(name));

        let props: IndexMap<String, OutputProp> = match shape {
            Some(shape) => shape
                .members
                .iter()
                .map(|member| (member.name.clone(), self.build_prop(member, &raw.default_values)))
                .collect(),
            None => {
                let diagnostic = Diagnostic::UnresolvedPropShape {
                    component: component.name.clone(),
                    expected: component.prop_shape_name.clone(),
                };
                tracing::warn!("{diagnostic}");
                diagnostics.push(diagnostic);
                if self.options.output_variant == OutputVariant::Classic {
                    return Assembly {
                        docgen: Docgen::Empty,
                        diagnostics,
                    };
                }
                IndexMap::new()
            }
        };

        let display_name = match self.options.output_variant {
            OutputVariant::Named => Some(component.name.clone()),
            OutputVariant::Classic => None,
        };

        Assembly {
            docgen: Docgen::Document(OutputDocument {
                display_name,
                description: component.comment.clone(),
                props,
            }),
            diagnostics,
        }
    }

    fn select_component<'r>(&self, raw: &'r RawDocument) -> Option<&'r ClassLikeDeclaration> {
        let mut components = raw.class_likes.iter().filter(|declaration| {
            declaration
                .base_type_name
                .as_deref()
                .is_some_and(|base| self.options.is_component_marker(base))
        });
        match SELECTION_POLICY {
            SelectionPolicy::FirstComponent => components.next(),
        }
    }

    fn nothing_found(&self) -> Docgen {
        match self.options.output_variant {
            OutputVariant::Classic => Docgen::Empty,
            OutputVariant::Named => Docgen::Absent,
        }
    }

    fn build_prop(&self, member: &PropMember, defaults: &DefaultValueMap) -> OutputProp {
        let mut prop_type = PropType::named(member.raw_type_text.clone());
        if self.options.include_value_sets {
            prop_type.value = member.value_set.as_ref().map(|values| {
                values
                    .iter()
                    .map(|value| json!({ "value": value, "computed": false }))
                    .collect()
            });
        }

        OutputProp {
            description: describe_member(member),
            prop_type,
            required: member.is_required,
            default_value: defaults
                .get(&member.name)
                .map(|value| DefaultValue::literal(format_default_value(value, &member.raw_type_text))),
        }
    }
}

/// Member comment, with the value set appended as
/// ` (one of the following:a,b)` when there is one.
pub fn describe_member(member: &PropMember) -> String {
    match &member.value_set {
        Some(values) => format!(
            "{} (one of the following:{})",
            member.comment,
            values.join(",")
        ),
        None => member.comment.clone(),
    }
}

/// Format a raw default for display according to the prop's type name.
/// Strings are wrapped in typographic quotes; everything else passes through.
pub fn format_default_value(value: &str, type_name: &str) -> String {
    match type_name {
        "number" | "boolean" => value.to_string(),
        "string" => format!("\u{201c}{value}\u{201d}"),
        _ => value.to_string(),
    }
}
