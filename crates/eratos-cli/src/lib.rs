//! Eratos CLI library.
//!
//! This library provides the functionality of the `eratos` command-line
//! interface: argument parsing, configuration loading with flag overrides,
//! and output formatting around the cluster runner.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, CliMode, Command, RangeArgs};
pub use error::{CliError, Result};
pub use output::Formatter;
