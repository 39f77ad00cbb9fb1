//! Config-driven entry points
//!
//! One code path serves both sequential and parallel execution: the
//! configured worker count decides how many blocks the partition has, and
//! a single worker is simply a one-block run.

use crate::config::{ClusterConfig, Mode};
use crate::error::ClusterError;
use crate::pool::WorkerPool;
use crate::report::{BenchReport, RunReport};
use eratos_sieve::{BigSegmentSieve, SegmentSieve};
use std::num::NonZeroUsize;

/// Run one distributed count described by `config`.
pub fn count(config: &ClusterConfig) -> Result<RunReport, ClusterError> {
    dispatch(&WorkerPool::new(config.worker_count()?), config)
}

/// Run the configured distributed count followed by a single-worker
/// baseline over the same range, deriving speedup and efficiency from the
/// two wall times.
pub fn bench(config: &ClusterConfig) -> Result<BenchReport, ClusterError> {
    let workers = config.worker_count()?;
    let parallel = dispatch(&WorkerPool::new(workers), config)?;
    // the parallel run has fully reduced before the baseline starts
    let sequential = dispatch(&WorkerPool::new(NonZeroUsize::MIN), config)?;
    Ok(BenchReport::new(parallel, sequential, workers.get()))
}

fn dispatch(pool: &WorkerPool, config: &ClusterConfig) -> Result<RunReport, ClusterError> {
    match config.mode {
        Mode::FixedWidth => {
            let (start, end) = config.fixed_bounds()?;
            pool.run(&start, &end, &SegmentSieve::new())
        }
        Mode::ArbitraryPrecision => {
            let (start, end) = config.big_bounds()?;
            pool.run(&start, &end, &BigSegmentSieve::new())
        }
    }
}
