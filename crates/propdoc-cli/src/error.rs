//! Error types for the propdoc CLI.

use std::path::PathBuf;

use miette::Report;
use propdoc::DocsError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from the documentation library (configuration, rendering)
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// Writing the output file failed
    #[error("failed to write '{}': {error}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Writing to stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Some input files could not be read or parsed
    #[error("{failed} of {total} file(s) could not be documented")]
    FilesFailed { failed: usize, total: usize },
}

/// Convert a CLI error into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(DocsError::Config { path, message }) => {
            let location = path
                .map(|path| format!(" in {}", path.display()))
                .unwrap_or_default();
            miette::miette!(
                "Configuration error{location}: {message}\n\nHint: check propdoc.toml, propdoc.json and PROPDOC_* variables"
            )
        }
        CliError::FilesFailed { .. } => {
            miette::miette!("{err}\n\nHint: run with --verbose for per-file details")
        }
        _ => miette::miette!("{}", err),
    }
}
