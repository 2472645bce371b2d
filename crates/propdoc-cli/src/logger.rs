//! Logging infrastructure for the propdoc CLI.
//!
//! Structured logging on top of the `tracing` ecosystem. The library emits
//! `debug!` events for classification decisions and `warn!` events for
//! diagnostics; this module decides which of them reach the terminal.
//!
//! # Features
//!
//! - **Verbosity control**: `--verbose` for debug, `--quiet` for errors only
//! - **Color support**: ANSI output with a `--no-color` override
//! - **Environment filters**: override via the `RUST_LOG` environment variable
//! - **Clean stdout**: logs go to stderr, stdout only carries JSON
//!
//! # Example
//!
//! ```rust,no_run
//! use propdoc_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Documenting components");
//! debug!("Parsing {}", "Button.tsx");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "propdoc=debug,propdoc_cli=debug";
const QUIET_FILTER: &str = "propdoc=error,propdoc_cli=error";
const DEFAULT_FILTER: &str = "propdoc=info,propdoc_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs. A
/// second call leaves the first subscriber in place.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (takes precedence over `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
///
/// # Verbosity Levels
///
/// The filter is chosen in this order:
/// 1. `--verbose` flag: DEBUG for the propdoc crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for the propdoc crates
///
/// # Examples
///
/// ```rust,no_run
/// use propdoc_cli::logger::init_logger;
///
/// // Default logging (INFO level)
/// init_logger(false, false, false);
///
/// // Debug logging
/// init_logger(true, false, false);
///
/// // Errors only, no colors (CI or piped output)
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
///
/// Useful in tests or when a caller needs precise control over filtering.
///
/// ```rust,no_run
/// use propdoc_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("propdoc=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_environment() {
        let filter = select_filter(true, false);
        assert!(filter.to_string().contains("propdoc=debug"));
    }

    #[test]
    fn quiet_only_shows_errors() {
        let filter = select_filter(false, true);
        assert!(filter.to_string().contains("propdoc=error"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
