//! propdoc - prop documentation for TypeScript React components.

use clap::Parser;
use miette::Result;
use propdoc_cli::{cli, error, logger, run};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    run::execute(args).map_err(error::cli_error_to_miette)
}
