//! Eratos Domain Layer
//!
//! This crate contains the core domain model for Eratos. It defines the
//! fundamental value objects and trait interfaces that the sieve engines and
//! the cluster layer depend upon, and carries no dependencies beyond the
//! arbitrary-precision integer primitive.
//!
//! ## Key Concepts
//!
//! - **Range**: an inclusive `[start, end]` interval over either `u64` or an
//!   arbitrary-precision bound
//! - **Partition**: an ordered split of a range into contiguous, disjoint,
//!   union-complete blocks, one per worker
//! - **LocalCount**: one worker's prime count for its assigned block
//! - **PrimeCounter**: the trait seam every counting engine implements
//!
//! ## Architecture
//!
//! - Pure value types and partitioning logic only
//! - Engine implementations live in `eratos-sieve`
//! - Worker scheduling and reduction live in `eratos-cluster`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bound;
pub mod partition;
pub mod range;
pub mod traits;
pub mod worker;

// Re-exports for convenience
pub use bound::RangeInt;
pub use partition::{Block, Partition, RangePartitioner};
pub use range::Range;
pub use traits::PrimeCounter;
pub use worker::{GlobalCount, LocalCount, WorkerId};
