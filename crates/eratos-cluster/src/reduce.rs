//! Combining local counts into the global total

use crate::error::ClusterError;
use eratos_domain::{GlobalCount, LocalCount, WorkerId};
use eratos_sieve::SieveError;
use std::sync::mpsc::Receiver;

/// What a worker submits to the aggregator: its identity and either a
/// local count or the failure that ended its run.
pub(crate) type Submission = (WorkerId, std::result::Result<u64, SieveError>);

/// Collects per-worker local counts and reduces them to the global total.
///
/// Only the designated aggregator holds the result; workers are done once
/// their submission is sent. The reduction blocks until every expected
/// count has arrived, so a stalled worker stalls the whole run.
pub struct ReductionCoordinator;

impl ReductionCoordinator {
    /// Sum local counts into the global total.
    ///
    /// Addition is associative and commutative, so the result is
    /// independent of arrival order. The `u64` accumulator exceeds the
    /// maximum count any supported range can produce.
    pub fn reduce(counts: &[LocalCount]) -> GlobalCount {
        counts.iter().map(|c| c.primes).sum()
    }

    /// Block until `expected` submissions have arrived, returning the
    /// counts sorted in worker order.
    ///
    /// A closed channel before `expected` submissions means a worker died
    /// without reporting; that is fatal.
    pub(crate) fn collect(
        rx: Receiver<Submission>,
        expected: usize,
    ) -> Result<Vec<LocalCount>, ClusterError> {
        let mut counts = Vec::with_capacity(expected);
        for received in 0..expected {
            let (worker, result) =
                rx.recv()
                    .map_err(|_| ClusterError::IncompleteReduction { received, expected })?;
            let primes = result.map_err(|source| ClusterError::Worker { worker, source })?;
            tracing::debug!(%worker, primes, "local count received");
            counts.push(LocalCount { worker, primes });
        }
        counts.sort_by_key(|c| c.worker);
        Ok(counts)
    }
}
