//! Declaration extraction over a parsed source unit.
//!
//! The extractor walks top-level statements (and the exported statements of
//! namespaces) and sorts each declaration into one of:
//!
//! - a component-like class, resolved through its `extends` clause;
//! - a component-like function, recognized by a single typed parameter or a
//!   component type annotation;
//! - a prop shape (top-level interface or object type alias);
//! - a `defaultProps` object, reconstructed into the unit's default map;
//! - nothing.

use oxc_ast::ast::{
    AssignmentOperator, AssignmentTarget, BindingPatternKind, Class, ClassElement, Declaration,
    ExportDefaultDeclarationKind, Expression, FormalParameters, Function, Statement,
    TSInterfaceDeclaration, TSInterfaceHeritage, TSModuleDeclaration, TSModuleDeclarationBody,
    TSSignature, TSType, TSTypeAnnotation, TSTypeName, VariableDeclaration,
};
use oxc_span::{GetSpan, Span};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::defaults::reconstruct_defaults;
use crate::heritage::{Heritage, HeritageResolver};
use crate::model::{
    ClassLikeDeclaration, DeclarationKind, Diagnostic, FUNCTION_COMPONENT_MARKER, PropMember,
    PropShapeDeclaration, RawDocument,
};
use crate::options::{DocgenOptions, HeritageMode};
use crate::oracle::SourceUnit;

/// Base type forced by [`HeritageMode::Convention`].
pub const CONVENTION_BASE_TYPE: &str = "Component";
/// Prop shape name forced by [`HeritageMode::Convention`].
pub const CONVENTION_PROP_SHAPE: &str = "Props";

/// Substrings that mark a union alternative as an array type.
const ARRAY_MARKERS: [&str; 2] = ["Array", "[]"];

/// Where a statement sits; prop shapes only count at the top level and
/// namespaces only expose their exported statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    SourceUnit,
    Namespace,
}

/// Extracts the raw document model from one source unit.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationExtractor<'o> {
    options: &'o DocgenOptions,
}

impl<'o> DeclarationExtractor<'o> {
    pub fn new(options: &'o DocgenOptions) -> Self {
        Self { options }
    }

    /// Walk `unit` and collect its declarations.
    pub fn extract(&self, unit: &SourceUnit<'_>) -> RawDocument {
        let walker = Walker {
            unit,
            options: self.options,
            resolver: HeritageResolver::new(&self.options.namespace_markers),
            shapes: ShapeTable::build(unit),
        };
        let mut document = RawDocument::default();
        for statement in unit.program().body.iter() {
            walker.visit_statement(statement, Scope::SourceUnit, &mut document);
        }
        debug!(
            class_likes = document.class_likes.len(),
            prop_shapes = document.prop_shapes.len(),
            defaults = document.default_values.len(),
            "extracted declarations"
        );
        document
    }
}

/// State for one extraction pass. The document being built is threaded
/// through explicitly.
struct Walker<'u, 'a, 'o> {
    unit: &'u SourceUnit<'a>,
    options: &'o DocgenOptions,
    resolver: HeritageResolver<'o>,
    shapes: ShapeTable<'u, 'a>,
}

impl<'u, 'a> Walker<'u, 'a, '_> {
    fn visit_statement(&self, statement: &'u Statement<'a>, scope: Scope, doc: &mut RawDocument) {
        match statement {
            Statement::ExportNamedDeclaration(export) => {
                if let Some(declaration) = &export.declaration {
                    self.visit_declaration(declaration, export.span.start, scope, doc);
                }
            }
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    self.visit_class(class, export.span.start, doc);
                }
                ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                    self.visit_function(function, export.span.start, doc);
                }
                ExportDefaultDeclarationKind::TSInterfaceDeclaration(interface) => {
                    self.visit_interface(interface, export.span.start, scope, doc);
                }
                _ => {}
            },
            // Outside of namespaces every top-level statement is visible.
            _ if scope == Scope::Namespace => {}
            Statement::ClassDeclaration(class) => self.visit_class(class, class.span.start, doc),
            Statement::FunctionDeclaration(function) => {
                self.visit_function(function, function.span.start, doc);
            }
            Statement::VariableDeclaration(variable) => {
                self.visit_variable(variable, variable.span.start, doc);
            }
            Statement::TSInterfaceDeclaration(interface) => {
                self.visit_interface(interface, interface.span.start, scope, doc);
            }
            Statement::TSTypeAliasDeclaration(alias) => {
                self.visit_type_alias(&alias.id.name, &alias.type_annotation, alias.span.start, scope, doc);
            }
            Statement::TSModuleDeclaration(module) => self.visit_namespace(module, doc),
            Statement::ExpressionStatement(statement) => {
                self.visit_default_props_assignment(&statement.expression, doc);
            }
            _ => {}
        }
    }

    fn visit_declaration(
        &self,
        declaration: &'u Declaration<'a>,
        anchor: u32,
        scope: Scope,
        doc: &mut RawDocument,
    ) {
        match declaration {
            Declaration::ClassDeclaration(class) => self.visit_class(class, anchor, doc),
            Declaration::FunctionDeclaration(function) => {
                self.visit_function(function, anchor, doc);
            }
            Declaration::VariableDeclaration(variable) => {
                self.visit_variable(variable, anchor, doc);
            }
            Declaration::TSInterfaceDeclaration(interface) => {
                self.visit_interface(interface, anchor, scope, doc);
            }
            Declaration::TSTypeAliasDeclaration(alias) => {
                self.visit_type_alias(&alias.id.name, &alias.type_annotation, anchor, scope, doc);
            }
            Declaration::TSModuleDeclaration(module) => self.visit_namespace(module, doc),
            _ => {}
        }
    }

    fn visit_namespace(&self, module: &'u TSModuleDeclaration<'a>, doc: &mut RawDocument) {
        match &module.body {
            Some(TSModuleDeclarationBody::TSModuleBlock(block)) => {
                for statement in block.body.iter() {
                    self.visit_statement(statement, Scope::Namespace, doc);
                }
            }
            // `namespace A.B { ... }`
            Some(TSModuleDeclarationBody::TSModuleDeclaration(inner)) => {
                self.visit_namespace(inner, doc);
            }
            None => {}
        }
    }

    fn visit_class(&self, class: &'u Class<'a>, anchor: u32, doc: &mut RawDocument) {
        let Some(id) = &class.id else {
            debug!("skipping anonymous class");
            return;
        };
        let name = id.name.to_string();

        let names = self.resolver.resolve_class(class);
        let heritage = self.heritage_for(&names);
        debug!(
            class = %name,
            base = ?heritage.base_type_name,
            props = ?heritage.prop_shape_name,
            "classified class"
        );

        for element in class.body.body.iter() {
            let ClassElement::PropertyDefinition(property) = element else {
                continue;
            };
            if !property.r#static || property.key.static_name().as_deref() != Some("defaultProps")
            {
                continue;
            }
            match &property.value {
                Some(value) => self.collect_defaults(value, &name, doc),
                None => doc.report(Diagnostic::MalformedDefaultProperties {
                    owner: name.clone(),
                    property: None,
                    reason: "defaultProps has no initializer".to_string(),
                }),
            }
        }

        doc.class_likes.push(ClassLikeDeclaration {
            comment: self.unit.doc_comment(&[anchor, class.span.start]),
            name,
            kind: DeclarationKind::Class,
            base_type_name: heritage.base_type_name,
            prop_shape_name: heritage.prop_shape_name,
        });
    }

    fn visit_function(&self, function: &'u Function<'a>, anchor: u32, doc: &mut RawDocument) {
        let Some(id) = &function.id else {
            return;
        };
        let Some(prop_shape_name) = self.single_parameter_type(&function.params) else {
            return;
        };
        doc.class_likes.push(ClassLikeDeclaration {
            name: id.name.to_string(),
            kind: DeclarationKind::Function,
            base_type_name: Some(FUNCTION_COMPONENT_MARKER.to_string()),
            prop_shape_name: Some(prop_shape_name),
            comment: self.unit.doc_comment(&[anchor, function.span.start]),
        });
    }

    fn visit_variable(&self, variable: &'u VariableDeclaration<'a>, anchor: u32, doc: &mut RawDocument) {
        for declarator in variable.declarations.iter() {
            let BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind else {
                continue;
            };
            let Some(init) = &declarator.init else {
                continue;
            };
            let comment_anchors = [anchor, variable.span.start, declarator.span.start];

            // `const Button: React.FC<ButtonProps> = ...`. Annotations are
            // taken as written; only component-typed ones classify the
            // declarator, anything else falls through to the parameter rule.
            if let Some(annotation) = &declarator.id.type_annotation {
                let names = self.resolver.resolve_type(&annotation.type_annotation);
                let heritage = Heritage::from_names(&names);
                if heritage
                    .base_type_name
                    .as_deref()
                    .is_some_and(|base| self.options.is_component_marker(base))
                {
                    doc.class_likes.push(ClassLikeDeclaration {
                        name: id.name.to_string(),
                        kind: DeclarationKind::Function,
                        base_type_name: heritage.base_type_name,
                        prop_shape_name: heritage.prop_shape_name,
                        comment: self.unit.doc_comment(&comment_anchors),
                    });
                    continue;
                }
            }

            let params = match init.get_inner_expression() {
                Expression::FunctionExpression(function) => &function.params,
                Expression::ArrowFunctionExpression(arrow) => &arrow.params,
                _ => continue,
            };
            let Some(prop_shape_name) = self.single_parameter_type(params) else {
                continue;
            };
            debug!(function = %id.name, props = %prop_shape_name, "classified function component");
            doc.class_likes.push(ClassLikeDeclaration {
                name: id.name.to_string(),
                kind: DeclarationKind::Function,
                base_type_name: Some(FUNCTION_COMPONENT_MARKER.to_string()),
                prop_shape_name: Some(prop_shape_name),
                comment: self.unit.doc_comment(&comment_anchors),
            });
        }
    }

    fn visit_interface(
        &self,
        interface: &'u TSInterfaceDeclaration<'a>,
        anchor: u32,
        scope: Scope,
        doc: &mut RawDocument,
    ) {
        if scope != Scope::SourceUnit {
            return;
        }
        let name = interface.id.name.as_str();
        doc.insert_prop_shape(PropShapeDeclaration {
            name: name.to_string(),
            members: self.resolve_members(name),
            comment: self.unit.doc_comment(&[anchor, interface.span.start]),
        });
    }

    fn visit_type_alias(
        &self,
        name: &str,
        annotation: &'u TSType<'a>,
        anchor: u32,
        scope: Scope,
        doc: &mut RawDocument,
    ) {
        if scope != Scope::SourceUnit || !matches!(annotation, TSType::TSTypeLiteral(_)) {
            return;
        }
        doc.insert_prop_shape(PropShapeDeclaration {
            name: name.to_string(),
            members: self.resolve_members(name),
            comment: self.unit.doc_comment(&[anchor]),
        });
    }

    /// `Button.defaultProps = { ... }`
    fn visit_default_props_assignment(&self, expression: &'u Expression<'a>, doc: &mut RawDocument) {
        let Expression::AssignmentExpression(assignment) = expression else {
            return;
        };
        if assignment.operator != AssignmentOperator::Assign {
            return;
        }
        let AssignmentTarget::StaticMemberExpression(member) = &assignment.left else {
            return;
        };
        if member.property.name.as_str() != "defaultProps" {
            return;
        }
        let owner = match &member.object {
            Expression::Identifier(identifier) => identifier.name.to_string(),
            other => self.unit.text(other.span()).to_string(),
        };
        self.collect_defaults(&assignment.right, &owner, doc);
    }

    fn collect_defaults(&self, initializer: &Expression<'a>, owner: &str, doc: &mut RawDocument) {
        let reconstruction = reconstruct_defaults(initializer, self.unit.source_text(), owner);
        doc.merge_defaults(reconstruction.values);
        for diagnostic in reconstruction.diagnostics {
            doc.report(diagnostic);
        }
    }

    fn heritage_for(&self, names: &[String]) -> Heritage {
        match self.options.heritage_mode {
            HeritageMode::Resolved => Heritage::from_names(names),
            HeritageMode::Convention if names.is_empty() => Heritage::default(),
            HeritageMode::Convention => Heritage {
                base_type_name: Some(CONVENTION_BASE_TYPE.to_string()),
                prop_shape_name: Some(CONVENTION_PROP_SHAPE.to_string()),
            },
        }
    }

    /// Type name of the only parameter, when there is exactly one and it is
    /// annotated with a type reference. Primitives, unions and literal types
    /// never name a prop shape.
    fn single_parameter_type(&self, params: &FormalParameters<'a>) -> Option<String> {
        if params.items.len() != 1 || params.rest.is_some() {
            return None;
        }
        let annotation = params.items[0].pattern.type_annotation.as_ref()?;
        let TSType::TSTypeReference(reference) = &annotation.type_annotation else {
            return None;
        };
        let name = match &reference.type_name {
            TSTypeName::IdentifierReference(identifier) => identifier.name.to_string(),
            other => self.unit.text(other.span()).to_string(),
        };
        Some(name)
    }

    /// Own members in source order, then members inherited through
    /// `extends` that are not overridden.
    fn resolve_members(&self, name: &str) -> Vec<PropMember> {
        let mut visiting = FxHashSet::default();
        self.resolve_members_guarded(name, &mut visiting)
    }

    fn resolve_members_guarded<'n>(
        &self,
        name: &'n str,
        visiting: &mut FxHashSet<&'n str>,
    ) -> Vec<PropMember>
    where
        'u: 'n,
    {
        let Some(shape) = self.shapes.get(name) else {
            return Vec::new();
        };
        if !visiting.insert(name) {
            debug!(shape = name, "inheritance cycle, stopping");
            return Vec::new();
        }

        let mut members: Vec<PropMember> = shape
            .members
            .iter()
            .filter_map(|signature| self.member_from_signature(signature))
            .collect();

        for heritage in shape.extends {
            let Some(base) = self.base_shape_name(heritage) else {
                continue;
            };
            for inherited in self.resolve_members_guarded(base, visiting) {
                if !members.iter().any(|member| member.name == inherited.name) {
                    members.push(inherited);
                }
            }
        }

        members
    }

    fn base_shape_name(&self, heritage: &'u TSInterfaceHeritage<'a>) -> Option<&'u str> {
        match &heritage.expression {
            Expression::Identifier(identifier) => Some(identifier.name.as_str()),
            _ => None,
        }
    }

    fn member_from_signature(&self, signature: &TSSignature<'a>) -> Option<PropMember> {
        match signature {
            TSSignature::TSPropertySignature(property) => {
                let name = property_name(property.computed, &property.key)?;
                let (raw_type_text, value_set) =
                    self.classify_type(property.type_annotation.as_deref());
                Some(PropMember {
                    name,
                    raw_type_text,
                    value_set,
                    is_required: !property.optional,
                    comment: self.unit.doc_comment(&[property.span.start]),
                })
            }
            TSSignature::TSMethodSignature(method) => {
                let name = property_name(method.computed, &method.key)?;
                let signature_text = self
                    .unit
                    .text(Span::new(method.key.span().end, method.span.end))
                    .trim()
                    .trim_start_matches('?')
                    .trim_end_matches([';', ','])
                    .trim()
                    .to_string();
                Some(PropMember {
                    name,
                    raw_type_text: signature_text,
                    value_set: None,
                    is_required: !method.optional,
                    comment: self.unit.doc_comment(&[method.span.start]),
                })
            }
            _ => None,
        }
    }

    /// Unions become `string` (or `array`) with their alternatives as the
    /// value set; any other type keeps its literal text.
    fn classify_type(&self, annotation: Option<&TSTypeAnnotation<'a>>) -> (String, Option<Vec<String>>) {
        let Some(annotation) = annotation else {
            return ("any".to_string(), None);
        };
        let mut ty = &annotation.type_annotation;
        while let TSType::TSParenthesizedType(inner) = ty {
            ty = &inner.type_annotation;
        }

        match ty {
            TSType::TSUnionType(union) if union.types.len() >= 2 => {
                let values: Vec<String> = union
                    .types
                    .iter()
                    .map(|alternative| self.unit.text(alternative.span()).trim().to_string())
                    .collect();
                let is_array = values
                    .iter()
                    .any(|value| ARRAY_MARKERS.iter().any(|marker| value.contains(marker)));
                let category = if is_array { "array" } else { "string" };
                (category.to_string(), Some(values))
            }
            _ => (self.unit.text(annotation.type_annotation.span()).trim().to_string(), None),
        }
    }
}

fn property_name(computed: bool, key: &oxc_ast::ast::PropertyKey<'_>) -> Option<String> {
    if computed {
        return None;
    }
    key.static_name().map(|name| name.to_string())
}

/// Member list and `extends` clause of a prop-shape candidate.
#[derive(Clone, Copy)]
struct ShapeSource<'u, 'a> {
    members: &'u [TSSignature<'a>],
    extends: &'u [TSInterfaceHeritage<'a>],
}

/// Top-level interfaces and object type aliases by name, used to resolve
/// inherited members. Later declarations shadow earlier ones.
struct ShapeTable<'u, 'a> {
    shapes: FxHashMap<&'u str, ShapeSource<'u, 'a>>,
}

impl<'u, 'a> ShapeTable<'u, 'a> {
    fn build(unit: &'u SourceUnit<'a>) -> Self {
        let mut shapes = FxHashMap::default();
        for statement in unit.program().body.iter() {
            let declaration = match statement {
                Statement::ExportNamedDeclaration(export) => match &export.declaration {
                    Some(Declaration::TSInterfaceDeclaration(interface)) => {
                        Some(Self::interface_source(interface))
                    }
                    Some(Declaration::TSTypeAliasDeclaration(alias)) => {
                        Self::alias_source(&alias.type_annotation)
                            .map(|source| (alias.id.name.as_str(), source))
                    }
                    _ => None,
                },
                Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                    ExportDefaultDeclarationKind::TSInterfaceDeclaration(interface) => {
                        Some(Self::interface_source(interface))
                    }
                    _ => None,
                },
                Statement::TSInterfaceDeclaration(interface) => {
                    Some(Self::interface_source(interface))
                }
                Statement::TSTypeAliasDeclaration(alias) => {
                    Self::alias_source(&alias.type_annotation)
                        .map(|source| (alias.id.name.as_str(), source))
                }
                _ => None,
            };
            if let Some((name, source)) = declaration {
                shapes.insert(name, source);
            }
        }
        Self { shapes }
    }

    fn interface_source(
        interface: &'u TSInterfaceDeclaration<'a>,
    ) -> (&'u str, ShapeSource<'u, 'a>) {
        (
            interface.id.name.as_str(),
            ShapeSource {
                members: &interface.body.body,
                extends: &interface.extends,
            },
        )
    }

    fn alias_source(annotation: &'u TSType<'a>) -> Option<ShapeSource<'u, 'a>> {
        match annotation {
            TSType::TSTypeLiteral(literal) => Some(ShapeSource {
                members: &literal.members,
                extends: &[],
            }),
            _ => None,
        }
    }

    fn get(&self, name: &str) -> Option<ShapeSource<'u, 'a>> {
        self.shapes.get(name).copied()
    }
}
