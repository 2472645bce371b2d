//! Parsed source unit backed by OXC.
//!
//! A [`SourceUnit`] is one parser session: it owns the syntax tree for a single
//! file, answers documentation-comment lookups and slices source text by span.
//! Sessions are not shared; batch runs create one per file.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};
use rustc_hash::FxHashMap;

use crate::error::{DocsError, Result};
use crate::jsdoc::doc_comment_text;

/// Pick the OXC source type from the file extension.
///
/// Unknown extensions are parsed as TSX so component files with JSX in them
/// still go through.
pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::tsx())
}

pub struct SourceUnit<'a> {
    program: Program<'a>,
    source: &'a str,
    /// JSDoc content spans keyed by the offset of the node they attach to.
    doc_comments: FxHashMap<u32, Span>,
}

impl<'a> SourceUnit<'a> {
    /// Parse `source`. Any parser error fails the whole unit.
    pub fn parse(allocator: &'a Allocator, path: &Path, source: &'a str) -> Result<Self> {
        let source_type = source_type_for(path);
        let parsed = Parser::new(allocator, source, source_type).parse();

        if parsed.panicked || !parsed.errors.is_empty() {
            let mut diagnostics: Vec<String> =
                parsed.errors.iter().map(|error| error.to_string()).collect();
            if diagnostics.is_empty() {
                diagnostics.push("parser aborted".to_string());
            }
            return Err(DocsError::parse_error(path.to_path_buf(), &diagnostics));
        }

        let program = parsed.program;
        let mut doc_comments = FxHashMap::default();
        for comment in program.comments.iter() {
            if comment.is_jsdoc() {
                // Later comments overwrite earlier ones attached to the same node.
                doc_comments.insert(comment.attached_to, comment.content_span());
            }
        }

        Ok(Self {
            program,
            source,
            doc_comments,
        })
    }

    pub fn program(&self) -> &Program<'a> {
        &self.program
    }

    pub fn source_text(&self) -> &'a str {
        self.source
    }

    /// Source text covered by `span`, or `""` when the span is out of range.
    pub fn text(&self, span: Span) -> &'a str {
        slice_source(self.source, span).unwrap_or_default()
    }

    /// Documentation comment attached at the first of `anchors` that has one.
    ///
    /// Anchors are node start offsets, usually the enclosing `export`
    /// statement followed by the declaration itself. Returns `""` when no
    /// comment is found.
    pub fn doc_comment(&self, anchors: &[u32]) -> String {
        anchors
            .iter()
            .find_map(|anchor| self.doc_comments.get(anchor))
            .map(|span| doc_comment_text(self.text(*span)))
            .unwrap_or_default()
    }
}

/// Slice `source` by byte span without panicking on bad offsets.
pub fn slice_source(source: &str, span: Span) -> Option<&str> {
    source.get(span.start as usize..span.end as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failure_is_reported() {
        let allocator = Allocator::default();
        let result = SourceUnit::parse(&allocator, Path::new("broken.tsx"), "class {");
        match result {
            Err(DocsError::Parse { path, message }) => {
                assert_eq!(path, Path::new("broken.tsx"));
                assert!(!message.is_empty());
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected a parse error"),
        }
    }

    #[test]
    fn resolves_comment_by_anchor() {
        let allocator = Allocator::default();
        let source = "/** Greets. */\nexport class Greeter {}\n";
        let unit = SourceUnit::parse(&allocator, Path::new("greeter.ts"), source).unwrap();
        let start = source.find("export").unwrap() as u32;
        assert_eq!(unit.doc_comment(&[start]), "Greets.");
        assert_eq!(unit.doc_comment(&[start + 1]), "");
    }

    #[test]
    fn line_comments_are_not_documentation() {
        let allocator = Allocator::default();
        let source = "// not docs\nexport class Greeter {}\n";
        let unit = SourceUnit::parse(&allocator, Path::new("greeter.ts"), source).unwrap();
        let start = source.find("export").unwrap() as u32;
        assert_eq!(unit.doc_comment(&[start]), "");
    }

    #[test]
    fn unknown_extension_parses_jsx() {
        let allocator = Allocator::default();
        let source = "export const el = <div />;\n";
        assert!(SourceUnit::parse(&allocator, Path::new("component.vue"), source).is_ok());
    }

    #[test]
    fn out_of_range_span_is_empty() {
        assert_eq!(slice_source("abc", Span::new(1, 10)), None);
        assert_eq!(slice_source("abc", Span::new(1, 3)), Some("bc"));
    }
}
