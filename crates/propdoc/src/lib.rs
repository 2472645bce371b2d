#![deny(clippy::all)]
// propdoc reads component sources straight from disk
#![allow(clippy::disallowed_methods)]

//! Prop documentation for TypeScript React components.
//!
//! This crate provides:
//! - A heritage resolver that finds the base type and prop shape of a component.
//! - A default-value reconstructor for `defaultProps` objects.
//! - A declaration extractor built on the OXC parser.
//! - A document assembler producing the docgen JSON schema.

pub mod assembler;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod heritage;
pub mod jsdoc;
pub mod model;
pub mod options;
pub mod oracle;
pub mod output;

#[cfg(feature = "json")]
pub mod generators;

pub use assembler::{Assembly, DocumentAssembler, SELECTION_POLICY, SelectionPolicy};
pub use error::{DocsError, Result};
pub use extractor::DeclarationExtractor;
pub use generator::{DocsGenerator, GeneratedDoc};
pub use heritage::{Heritage, HeritageResolver};
pub use model::{
    ClassLikeDeclaration, DeclarationKind, DefaultValueMap, Diagnostic, FUNCTION_COMPONENT_MARKER,
    PropMember, PropShapeDeclaration, RawDocument,
};
pub use options::{DocgenOptions, HeritageMode, OutputVariant};
pub use output::{DefaultValue, Docgen, OutputDocument, OutputProp, PropType};

#[cfg(feature = "json")]
pub use generators::json::{render_json, render_json_map};
