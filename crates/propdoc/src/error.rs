use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Fatal error variants for prop documentation extraction.
///
/// Recoverable conditions (a missing prop shape, malformed default properties,
/// no component at all) are not errors; they surface as
/// [`Diagnostic`](crate::model::Diagnostic) values next to the document.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read or access a source file.
    #[error("failed to read source '{path}': {error}")]
    Io {
        /// Path to the source file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// OXC could not produce a syntax tree for the source file.
    #[error("failed to parse source '{path}': {message}")]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser error message.
        message: String,
    },

    /// Configuration could not be loaded or had invalid values.
    #[error("invalid configuration{}: {message}", path.as_ref().map(|p| format!(" in '{}'", p.display())).unwrap_or_default())]
    Config {
        /// Configuration file involved, if any.
        path: Option<PathBuf>,
        /// Human-readable reason.
        message: String,
    },

    /// Serialising the output document failed.
    #[error("failed to serialize documentation: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DocsError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    /// Helper to create a configuration error.
    pub fn config(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path,
            message: message.into(),
        }
    }
}
