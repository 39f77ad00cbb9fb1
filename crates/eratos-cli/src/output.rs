//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use eratos_cluster::{BenchReport, RunReport};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat) -> Self {
        Self { format }
    }

    /// Format a run report.
    pub fn format_run(&self, report: &RunReport) -> Result<String> {
        match self.format {
            CliFormat::Text => Ok(report.summary()),
            CliFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// Format a benchmark report.
    pub fn format_bench(&self, report: &BenchReport) -> Result<String> {
        match self.format {
            CliFormat::Text => Ok(report.summary()),
            CliFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}
