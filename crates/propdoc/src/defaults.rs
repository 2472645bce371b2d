//! Default-value reconstruction from `defaultProps` object literals.
//!
//! Values are never evaluated. Each property's default is captured as source
//! text using the first strategy that applies:
//!
//! 1. literal text (`"hello"` -> `hello`, `42` -> `42`, `undefined`);
//! 2. the statements of a function body (`() => { return 1; }` -> `return 1;`);
//! 3. the full initializer expression text.
//!
//! A captured value of `undefined` means "no default".

use oxc_ast::ast::{Expression, FunctionBody, ObjectPropertyKind};
use oxc_span::{GetSpan, Span};

use crate::model::{DefaultValueMap, Diagnostic};
use crate::oracle::slice_source;

/// Defaults read from one initializer plus anything that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    pub values: DefaultValueMap,
    pub diagnostics: Vec<Diagnostic>,
}

impl Reconstruction {
    fn malformed(owner: &str, property: Option<&str>, reason: &str) -> Diagnostic {
        Diagnostic::MalformedDefaultProperties {
            owner: owner.to_string(),
            property: property.map(str::to_string),
            reason: reason.to_string(),
        }
    }
}

/// Reconstruct defaults from `initializer`, the value assigned to
/// `owner.defaultProps`.
pub fn reconstruct_defaults(
    initializer: &Expression<'_>,
    source: &str,
    owner: &str,
) -> Reconstruction {
    let mut reconstruction = Reconstruction::default();

    // `{...} as const`, `satisfies`, and parentheses wrap the literal.
    let Expression::ObjectExpression(object) = initializer.get_inner_expression() else {
        reconstruction.diagnostics.push(Reconstruction::malformed(
            owner,
            None,
            "initializer is not an object literal",
        ));
        return reconstruction;
    };

    for property in object.properties.iter() {
        let property = match property {
            ObjectPropertyKind::ObjectProperty(property) => property,
            ObjectPropertyKind::SpreadProperty(_) => {
                reconstruction.diagnostics.push(Reconstruction::malformed(
                    owner,
                    None,
                    "spread entries are not expanded",
                ));
                continue;
            }
        };

        let name = match property.key.static_name() {
            Some(name) if !property.computed => name.to_string(),
            _ => {
                reconstruction.diagnostics.push(Reconstruction::malformed(
                    owner,
                    None,
                    "computed keys are not supported",
                ));
                continue;
            }
        };

        match reconstruct_value(&property.value, source) {
            Some(value) if value != "undefined" => {
                reconstruction.values.insert(name, value);
            }
            Some(_) => {
                tracing::debug!(owner, property = %name, "default is undefined, skipping");
            }
            None => {
                reconstruction.diagnostics.push(Reconstruction::malformed(
                    owner,
                    Some(&name),
                    "initializer span is outside the source text",
                ));
            }
        }
    }

    reconstruction
}

/// Capture the default text of a single initializer expression.
pub fn reconstruct_value(expression: &Expression<'_>, source: &str) -> Option<String> {
    if let Some(text) = literal_text(expression) {
        return Some(text.trim().to_string());
    }
    if let Some(body) = block_body(expression) {
        return statements_text(body, source).map(|text| text.trim().to_string());
    }
    slice_source(source, expression.span()).map(|text| text.trim().to_string())
}

/// Text of literals that carry it directly. Keywords such as `true` or
/// `null` have no literal text and fall through to the source slice.
fn literal_text<'e>(expression: &'e Expression<'_>) -> Option<&'e str> {
    match expression {
        Expression::StringLiteral(literal) => Some(literal.value.as_str()),
        Expression::NumericLiteral(literal) => literal.raw.as_ref().map(|raw| raw.as_str()),
        Expression::TemplateLiteral(template) if template.expressions.is_empty() => template
            .quasis
            .first()
            .and_then(|quasi| quasi.value.cooked.as_ref())
            .map(|cooked| cooked.as_str()),
        Expression::Identifier(identifier) => Some(identifier.name.as_str()),
        _ => None,
    }
}

/// Block body of a function-like initializer. Arrow functions with an
/// expression body are not blocks.
fn block_body<'e, 'a>(expression: &'e Expression<'a>) -> Option<&'e FunctionBody<'a>> {
    match expression {
        Expression::FunctionExpression(function) => function.body.as_deref(),
        Expression::ArrowFunctionExpression(arrow) if !arrow.expression => Some(&*arrow.body),
        _ => None,
    }
}

/// Source from the start of the first statement to the end of the last one.
fn statements_text<'s>(body: &FunctionBody<'_>, source: &'s str) -> Option<&'s str> {
    match (body.statements.first(), body.statements.last()) {
        (Some(first), Some(last)) => {
            slice_source(source, Span::new(first.span().start, last.span().end))
        }
        _ => Some(""),
    }
}
