//! Configuration loading for the CLI.
//!
//! The run configuration is the cluster's own [`ClusterConfig`]: the CLI
//! reads it from an optional TOML file and lays command-line overrides on
//! top, so a flag always wins over the file and the file over the
//! defaults.

use crate::cli::RangeArgs;
use crate::error::Result;
use eratos_cluster::ClusterConfig;
use std::fs;
use std::path::Path;

/// Load the run configuration from an optional TOML file.
pub fn load(path: Option<&Path>) -> Result<ClusterConfig> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        None => Ok(ClusterConfig::default()),
    }
}

/// Apply command-line overrides on top of a loaded configuration.
pub fn apply_overrides(mut config: ClusterConfig, args: &RangeArgs) -> ClusterConfig {
    if let Some(start) = &args.start {
        config.start = start.clone();
    }
    if let Some(end) = &args.end {
        config.end = end.clone();
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    config
}
