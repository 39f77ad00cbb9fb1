//! Error types for the cluster layer

use eratos_domain::WorkerId;
use eratos_sieve::SieveError;
use thiserror::Error;

/// Result type alias for cluster operations.
pub type Result<T> = std::result::Result<T, ClusterError>;

/// Errors that can occur during a distributed run.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// A worker's counting invocation failed; fatal to the whole run
    #[error("{worker} failed")]
    Worker {
        /// The worker whose count failed
        worker: WorkerId,
        /// The engine error
        #[source]
        source: SieveError,
    },

    /// A worker exited without submitting its local count
    #[error("reduction received {received} of {expected} local counts")]
    IncompleteReduction {
        /// Counts received before the channel closed
        received: usize,
        /// Counts the partition called for
        expected: usize,
    },

    /// The configured worker count was zero
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// A range bound could not be parsed for the selected mode
    #[error("invalid range bound '{value}': {reason}")]
    InvalidBound {
        /// The offending bound as given
        value: String,
        /// Why it was rejected
        reason: String,
    },
}
