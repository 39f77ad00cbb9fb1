//! Eratos Sieve Engines
//!
//! Segmented sieve of Eratosthenes in two forms sharing one contract:
//!
//! - [`SegmentSieve`] counts primes in `[start, end]` for native `u64` bounds
//! - [`BigSegmentSieve`] does the same for arbitrary-precision bounds, with
//!   the segment width capacity-checked before anything is allocated
//!
//! Both build a fresh [`PrimalityTable`] of base primes up to
//! `floor(sqrt(end))` on every call and drop all tables on return; no state
//! survives between invocations.
//!
//! # Examples
//!
//! ```
//! use eratos_sieve::SegmentSieve;
//!
//! let sieve = SegmentSieve::new();
//! assert_eq!(sieve.count(1, 100).unwrap(), 25);
//! ```

#![warn(missing_docs)]

mod base;
mod big;
mod error;
mod segment;

pub use base::PrimalityTable;
pub use big::BigSegmentSieve;
pub use error::{Result, SieveError};
pub use segment::SegmentSieve;
