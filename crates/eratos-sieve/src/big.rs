//! Segmented sieve over arbitrary-precision bounds

use crate::base::PrimalityTable;
use crate::error::SieveError;
use eratos_domain::PrimeCounter;
use malachite::num::arithmetic::traits::FloorSqrt;
use malachite::Natural;

/// Counts primes in an inclusive range with arbitrary-precision bounds.
///
/// The contract matches [`crate::SegmentSieve`]; only the bound arithmetic
/// differs. Base primes stay native-width because they never exceed
/// `floor(sqrt(end))`, and the segment table is indexed by `usize`, so the
/// segment width must fit the address space. A width that does not fit
/// fails with [`SieveError::CapacityExceeded`] before anything is
/// allocated.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigSegmentSieve;

impl BigSegmentSieve {
    /// Create a counting engine.
    pub fn new() -> Self {
        Self
    }

    /// Count the primes in `[start, end]`.
    pub fn count(&self, start: &Natural, end: &Natural) -> Result<u64, SieveError> {
        let two = Natural::from(2u32);
        if *end < two || start > end {
            return Ok(0);
        }
        let start = if *start < two { two } else { start.clone() };

        // capacity checks come before any table is built
        let width_nat = (end - &start) + Natural::from(1u32);
        let width =
            usize::try_from(&width_nat).map_err(|_| SieveError::CapacityExceeded {
                width: width_nat.to_string(),
            })?;
        let limit_nat = end.clone().floor_sqrt();
        let limit = u64::try_from(&limit_nat).map_err(|_| SieveError::CapacityExceeded {
            width: limit_nat.to_string(),
        })?;
        tracing::debug!(%start, %end, limit, width, "sieving big segment");

        let base = PrimalityTable::build(limit)?;
        let mut segment = Vec::new();
        segment
            .try_reserve_exact(width)
            .map_err(|_| SieveError::OutOfMemory { entries: width })?;
        segment.resize(width, true);

        for p in base.primes() {
            let step = Natural::from(p);

            // first multiple of p at or above the segment, never below p*p
            // so the prime's own entry cannot be flipped
            let mut first = (&start / &step) * &step;
            if first < start {
                first += &step;
            }
            let square = &step * &step;
            if first < square {
                first = square;
            }
            if first > *end {
                continue;
            }

            // the offset is inside the segment, which fits usize
            let Ok(mut index) = usize::try_from(&(&first - &start)) else {
                continue;
            };
            match usize::try_from(p) {
                Ok(stride) => {
                    while index < width {
                        segment[index] = false;
                        match index.checked_add(stride) {
                            Some(next) => index = next,
                            None => break,
                        }
                    }
                }
                Err(_) => {
                    // prime wider than the address space: at most one
                    // multiple can land in the segment
                    segment[index] = false;
                }
            }
        }

        Ok(segment.iter().filter(|&&entry| entry).count() as u64)
    }
}

impl PrimeCounter<Natural> for BigSegmentSieve {
    type Error = SieveError;

    fn count(&self, start: &Natural, end: &Natural) -> Result<u64, SieveError> {
        BigSegmentSieve::count(self, start, end)
    }
}
