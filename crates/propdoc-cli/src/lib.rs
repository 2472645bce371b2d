//! Command-line front end for the `propdoc` library.
//!
//! - [`cli`] - argument definitions
//! - [`run`] - the documentation command
//! - [`error`] - CLI errors and miette conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod error;
pub mod logger;
pub mod run;
