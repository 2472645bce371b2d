//! Base-type clause flattening.
//!
//! `class Foo extends React.Component<FooProps, State>` flattens to
//! `["React", "Component", "FooProps", "State"]`, which normalizes to
//! `["React.Component", "FooProps", "State"]`: the base type name followed by
//! the prop shape name.

use oxc_ast::ast::{Class, IdentifierName, IdentifierReference, TSType};
use oxc_ast_visit::Visit;

/// Base type and prop shape names taken from a resolved name list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heritage {
    pub base_type_name: Option<String>,
    pub prop_shape_name: Option<String>,
}

impl Heritage {
    /// Take the first two names; fewer names leave the fields unset.
    pub fn from_names(names: &[String]) -> Self {
        Self {
            base_type_name: names.first().cloned(),
            prop_shape_name: names.get(1).cloned(),
        }
    }
}

/// Flattens base-type clauses into ordered identifier names.
#[derive(Debug, Clone, Copy)]
pub struct HeritageResolver<'o> {
    namespace_markers: &'o [String],
}

impl<'o> HeritageResolver<'o> {
    pub fn new(namespace_markers: &'o [String]) -> Self {
        Self { namespace_markers }
    }

    /// Resolve the `extends` clause of a class, including its type arguments.
    /// A class without one resolves to an empty list.
    pub fn resolve_class(&self, class: &Class<'_>) -> Vec<String> {
        let Some(super_class) = &class.super_class else {
            return Vec::new();
        };
        let mut collector = IdentifierCollector::default();
        collector.visit_expression(super_class);
        if let Some(arguments) = &class.super_type_arguments {
            collector.visit_ts_type_parameter_instantiation(arguments);
        }
        self.normalize(collector.names)
    }

    /// Resolve a type annotation such as `React.FC<ButtonProps>`.
    pub fn resolve_type(&self, ty: &TSType<'_>) -> Vec<String> {
        let mut collector = IdentifierCollector::default();
        collector.visit_ts_type(ty);
        self.normalize(collector.names)
    }

    /// Fold a leading namespace marker into the next name. Only the first
    /// marker (in priority order) that matches is applied.
    pub fn normalize(&self, mut names: Vec<String>) -> Vec<String> {
        if names.len() < 2 {
            return names;
        }
        let marker = self
            .namespace_markers
            .iter()
            .find(|marker| **marker == names[0]);
        if let Some(marker) = marker {
            let qualified = format!("{marker}.{}", names[1]);
            names.remove(0);
            names[0] = qualified;
        }
        names
    }
}

/// Collects identifier tokens depth-first, in source order.
#[derive(Default)]
struct IdentifierCollector {
    names: Vec<String>,
}

impl<'a> Visit<'a> for IdentifierCollector {
    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        self.names.push(it.name.to_string());
    }

    fn visit_identifier_name(&mut self, it: &IdentifierName<'a>) {
        self.names.push(it.name.to_string());
    }
}
