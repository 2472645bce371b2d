use std::fs;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use rayon::prelude::*;

use crate::assembler::DocumentAssembler;
use crate::error::{DocsError, Result};
use crate::extractor::DeclarationExtractor;
use crate::model::{Diagnostic, RawDocument};
use crate::options::DocgenOptions;
use crate::oracle::SourceUnit;
use crate::output::Docgen;

/// Documentation generated for one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDoc {
    pub path: PathBuf,
    pub docgen: Docgen,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs extraction and assembly for source files.
#[derive(Debug, Clone, Default)]
pub struct DocsGenerator {
    options: DocgenOptions,
}

impl DocsGenerator {
    /// Create a new generator with the provided options.
    pub fn new(options: DocgenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DocgenOptions {
        &self.options
    }

    /// Generate documentation for several files in parallel.
    ///
    /// Every file gets its own parser session. Results come back in input
    /// order and a failing file does not stop the others.
    pub fn generate_many<I>(&self, paths: I) -> Vec<(PathBuf, Result<GeneratedDoc>)>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().collect();
        paths
            .into_par_iter()
            .map(|path| {
                let result = self.generate_from_path(&path);
                (path, result)
            })
            .collect()
    }

    /// Generate documentation for a file on disk.
    pub fn generate_from_path(&self, path: impl AsRef<Path>) -> Result<GeneratedDoc> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| DocsError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.generate_from_source(path, &source)
    }

    /// Generate documentation for an in-memory source string.
    pub fn generate_from_source(&self, path: impl AsRef<Path>, source: &str) -> Result<GeneratedDoc> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("generate", path = %path.display()).entered();

        let raw = self.extract_raw(path, source)?;
        let assembly = DocumentAssembler::new(&self.options).assemble(&raw);

        Ok(GeneratedDoc {
            path: path.to_path_buf(),
            docgen: assembly.docgen,
            diagnostics: assembly.diagnostics,
        })
    }

    /// Run only the extraction stage, returning the raw document model.
    pub fn extract_raw(&self, path: impl AsRef<Path>, source: &str) -> Result<RawDocument> {
        let allocator = Allocator::default();
        let unit = SourceUnit::parse(&allocator, path.as_ref(), source)?;
        Ok(DeclarationExtractor::new(&self.options).extract(&unit))
    }
}
