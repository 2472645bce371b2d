//! The `propdoc` command: load options, document files, write JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use propdoc::{DocgenOptions, DocsGenerator, GeneratedDoc, render_json, render_json_map};
use tracing::{debug, error, info, warn};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Options from configuration with command-line overrides applied.
pub fn resolve_options(args: &Cli) -> Result<DocgenOptions> {
    let mut options = DocgenOptions::load(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        options.output_variant = variant.into();
    }
    if let Some(heritage) = args.heritage {
        options.heritage_mode = heritage.into();
    }
    if args.value_sets {
        options.include_value_sets = true;
    }
    debug!(?options, "resolved options");
    Ok(options)
}

/// Execute the command.
///
/// Documents that could be produced are still written when other files
/// fail; the failures turn into [`CliError::FilesFailed`].
pub fn execute(args: Cli) -> Result<()> {
    let options = resolve_options(&args)?;
    let generator = DocsGenerator::new(options);
    let total = args.files.len();

    let mut docs: Vec<GeneratedDoc> = Vec::with_capacity(total);
    let mut failed = 0;
    for (path, result) in generator.generate_many(args.files.iter().cloned()) {
        match result {
            Ok(doc) => {
                for diagnostic in &doc.diagnostics {
                    warn!(file = %path.display(), "{diagnostic}");
                }
                docs.push(doc);
            }
            Err(err) => {
                error!("{err}");
                failed += 1;
            }
        }
    }

    let pretty = !args.compact;
    if !docs.is_empty() {
        let json = if total == 1 {
            render_json(&docs[0].docgen, pretty)?
        } else {
            render_json_map(&docs, pretty)?
        };
        emit(&json, args.out.as_deref())?;
    }

    info!(documented = docs.len(), failed, "done");
    if failed > 0 {
        return Err(CliError::FilesFailed { failed, total });
    }
    Ok(())
}

fn emit(json: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|error| CliError::Write {
                path: path.to_path_buf(),
                error,
            })?;
            info!(path = %path.display(), "wrote documentation");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
