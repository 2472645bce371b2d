//! Command-line interface definition for propdoc.

pub mod enums;

use std::path::PathBuf;

use clap::Parser;

pub use enums::{HeritageArg, VariantArg};

/// propdoc - prop documentation for TypeScript React components
#[derive(Parser, Debug)]
#[command(
    name = "propdoc",
    version,
    about = "Generate prop documentation for TypeScript React components",
    long_about = "propdoc reads TypeScript component sources and prints a JSON document\n\
                  describing each component's props: types, descriptions, required flags\n\
                  and declared default values."
)]
pub struct Cli {
    /// Source files to document
    ///
    /// A single file prints its document. Several files print an object
    /// keyed by path.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Configuration file (propdoc.toml or propdoc.json)
    ///
    /// Without this flag, propdoc.toml or propdoc.json in the working
    /// directory is used when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output shape
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// How class heritage is turned into component metadata
    #[arg(long, value_enum)]
    pub heritage: Option<HeritageArg>,

    /// Emit union alternatives as `type.value`
    #[arg(long)]
    pub value_sets: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
