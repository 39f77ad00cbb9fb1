//! Eratos Cluster Layer
//!
//! The distribution protocol around the sieve engines: a range is
//! partitioned once, a fixed group of workers counts its blocks in
//! parallel with no shared mutable state, and the aggregator reduces the
//! local counts into the global total. Sequential execution is the same
//! pipeline with a single worker.
//!
//! Worker failure is fatal to the run: there is no retry, re-balancing, or
//! partial-result delivery.
//!
//! # Examples
//!
//! ```
//! use eratos_cluster::{runner, ClusterConfig};
//!
//! let config = ClusterConfig {
//!     end: "1000".into(),
//!     ..ClusterConfig::default()
//! };
//! let report = runner::count(&config).unwrap();
//! assert_eq!(report.total, 168);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pool;
mod reduce;
mod report;
pub mod runner;

pub use config::{ClusterConfig, Mode};
pub use error::{ClusterError, Result};
pub use pool::WorkerPool;
pub use reduce::ReductionCoordinator;
pub use report::{BenchReport, RunReport, WorkerReport};
