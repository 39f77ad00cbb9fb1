//! Configuration for distributed runs
//!
//! Bounds are carried as decimal strings so one configuration surface
//! serves both the native-width and the arbitrary-precision engine; they
//! are parsed when a run is dispatched.

use crate::error::ClusterError;
use malachite::Natural;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Which counting engine a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// `u64` bounds, native-width segmented sieve
    #[default]
    FixedWidth,
    /// Arbitrary-precision bounds
    ArbitraryPrecision,
}

/// Configuration for one distributed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// First value of the global range, in decimal
    #[serde(default = "default_start")]
    pub start: String,

    /// Last value of the global range, in decimal
    #[serde(default = "default_end")]
    pub end: String,

    /// Number of partition blocks and parallel workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Engine selection
    #[serde(default)]
    pub mode: Mode,
}

fn default_start() -> String {
    "1".to_string()
}

fn default_end() -> String {
    "100000000".to_string()
}

fn default_workers() -> usize {
    4
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            workers: default_workers(),
            mode: Mode::default(),
        }
    }
}

impl ClusterConfig {
    /// Validated worker count.
    pub fn worker_count(&self) -> Result<NonZeroUsize, ClusterError> {
        NonZeroUsize::new(self.workers).ok_or(ClusterError::NoWorkers)
    }

    /// Bounds parsed for the native-width engine.
    pub fn fixed_bounds(&self) -> Result<(u64, u64), ClusterError> {
        Ok((parse_u64(&self.start)?, parse_u64(&self.end)?))
    }

    /// Bounds parsed for the arbitrary-precision engine.
    pub fn big_bounds(&self) -> Result<(Natural, Natural), ClusterError> {
        Ok((parse_natural(&self.start)?, parse_natural(&self.end)?))
    }
}

fn parse_u64(value: &str) -> Result<u64, ClusterError> {
    value.parse().map_err(|_| ClusterError::InvalidBound {
        value: value.to_string(),
        reason: "not a decimal integer in native width".to_string(),
    })
}

fn parse_natural(value: &str) -> Result<Natural, ClusterError> {
    Natural::from_str(value).map_err(|_| ClusterError::InvalidBound {
        value: value.to_string(),
        reason: "not a decimal natural number".to_string(),
    })
}
