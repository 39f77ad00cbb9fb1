//! Error types for the sieve engines

use thiserror::Error;

/// Result type alias for sieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;

/// Errors that can occur while counting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// A table would need more entries than the address space can index
    #[error("range width {width} exceeds addressable capacity")]
    CapacityExceeded {
        /// The width that failed to narrow, rendered in decimal
        width: String,
    },

    /// A table allocation was refused by the allocator
    #[error("table allocation failed for {entries} entries")]
    OutOfMemory {
        /// Number of entries requested
        entries: usize,
    },
}
