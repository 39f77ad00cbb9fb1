//! The fixed-size worker group

use crate::error::ClusterError;
use crate::reduce::ReductionCoordinator;
use crate::report::RunReport;
use eratos_domain::{PrimeCounter, Range, RangeInt, RangePartitioner, WorkerId};
use eratos_sieve::SieveError;
use std::num::NonZeroUsize;
use std::sync::{mpsc, Barrier};
use std::thread;
use std::time::Instant;

/// A fixed group of parallel workers driving one counting engine.
///
/// Each worker sieves its own block with locally owned tables; the only
/// shared state is the read-only partition and the write-once total held
/// by the aggregator. One worker makes the pool a sequential runner over
/// the same code path.
pub struct WorkerPool {
    workers: NonZeroUsize,
}

impl WorkerPool {
    /// Create a pool of `workers` parallel workers.
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Number of workers in the pool.
    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Run one distributed count over `[start, end]`.
    ///
    /// The range is partitioned once; every worker waits at a barrier so
    /// the timed region starts together, counts its block on its own
    /// thread, and submits a [`eratos_domain::LocalCount`]. The calling
    /// thread is the aggregator: it blocks until all submissions have
    /// arrived, reduces them, and alone observes the total.
    ///
    /// An inverted range counts zero without spawning workers. A worker
    /// error aborts the run; a worker panic propagates.
    pub fn run<T, C>(&self, start: &T, end: &T, counter: &C) -> Result<RunReport, ClusterError>
    where
        T: RangeInt,
        C: PrimeCounter<T, Error = SieveError> + Sync,
    {
        let n = self.workers.get();
        let Some(range) = Range::new(start.clone(), end.clone()) else {
            tracing::debug!(%start, %end, "inverted range, nothing to count");
            return Ok(RunReport::empty(n));
        };
        let partition = RangePartitioner::partition(&range, self.workers);

        // workers and the aggregator meet here so the timed region starts
        // with every worker released at once
        let barrier = Barrier::new(n + 1);
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for (index, block) in partition.blocks().enumerate() {
                let worker = WorkerId::new(index);
                let tx = tx.clone();
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let result = match block.bounds() {
                        Some((block_start, block_end)) => {
                            tracing::info!(%worker, "executing [{block_start}, {block_end}]");
                            counter.count(&block_start, &block_end)
                        }
                        None => Ok(0),
                    };
                    // the aggregator may have dropped the receiver after an
                    // earlier worker failed
                    let _ = tx.send((worker, result));
                });
            }
            drop(tx);

            barrier.wait();
            let timer = Instant::now();
            let counts = ReductionCoordinator::collect(rx, n)?;
            let elapsed = timer.elapsed();
            let total = ReductionCoordinator::reduce(&counts);
            tracing::info!(
                total,
                elapsed_secs = elapsed.as_secs_f64(),
                "reduction complete"
            );
            Ok(RunReport::from_partition(&partition, &counts, total, elapsed))
        })
    }
}
