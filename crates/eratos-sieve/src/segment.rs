//! Segmented sieve over native-width bounds

use crate::base::PrimalityTable;
use crate::error::SieveError;
use eratos_domain::PrimeCounter;

/// Counts primes in an inclusive `u64` range with a segmented sieve.
///
/// Only a table for the range itself is materialized: base primes up to
/// `floor(sqrt(end))` are sieved first, then each base prime marks its
/// multiples inside the segment. Memory use is proportional to
/// `sqrt(end) + (end - start)`, independent of the magnitude of `start`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentSieve;

impl SegmentSieve {
    /// Create a counting engine.
    pub fn new() -> Self {
        Self
    }

    /// Count the primes in `[start, end]`.
    ///
    /// An inverted range or one ending below 2 counts zero. `start` is
    /// clamped up to 2 before sieving.
    pub fn count(&self, start: u64, end: u64) -> Result<u64, SieveError> {
        if end < 2 || start > end {
            return Ok(0);
        }
        let start = start.max(2);

        let width = usize::try_from(end - start + 1).map_err(|_| SieveError::CapacityExceeded {
            width: (end - start + 1).to_string(),
        })?;
        let limit = end.isqrt();
        tracing::debug!(start, end, limit, width, "sieving segment");

        let base = PrimalityTable::build(limit)?;
        let mut segment = Vec::new();
        segment
            .try_reserve_exact(width)
            .map_err(|_| SieveError::OutOfMemory { entries: width })?;
        segment.resize(width, true);

        for p in base.primes() {
            // Marking starts at max(p*p, first multiple of p >= start), so a
            // base prime lying inside the segment never flips its own entry.
            let first = match first_multiple_at_or_above(p, start) {
                Some(m) => m.max(p * p),
                None => continue,
            };
            let mut m = first;
            while m <= end {
                segment[(m - start) as usize] = false;
                match m.checked_add(p) {
                    Some(next) => m = next,
                    None => break,
                }
            }
        }

        Ok(segment.iter().filter(|&&entry| entry).count() as u64)
    }
}

impl PrimeCounter<u64> for SegmentSieve {
    type Error = SieveError;

    fn count(&self, start: &u64, end: &u64) -> Result<u64, SieveError> {
        SegmentSieve::count(self, *start, *end)
    }
}

/// Smallest multiple of `p` that is `>= start`, or `None` when no such
/// multiple is representable.
fn first_multiple_at_or_above(p: u64, start: u64) -> Option<u64> {
    let quotient = start / p;
    if quotient * p == start {
        Some(start)
    } else {
        (quotient + 1).checked_mul(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trial-division oracle for small ranges.
    fn oracle(start: u64, end: u64) -> u64 {
        (start.max(2)..=end.max(1)).filter(|&n| is_prime(n)).count() as u64
    }

    fn is_prime(n: u64) -> bool {
        if n <= 1 {
            return false;
        }
        if n <= 3 {
            return true;
        }
        if n % 2 == 0 || n % 3 == 0 {
            return false;
        }
        let mut d = 5;
        while d * d <= n {
            if n % d == 0 || n % (d + 2) == 0 {
                return false;
            }
            d += 6;
        }
        true
    }

    #[test]
    fn test_empty_ranges_count_zero() {
        let sieve = SegmentSieve::new();
        assert_eq!(sieve.count(0, 0).unwrap(), 0);
        assert_eq!(sieve.count(0, 1).unwrap(), 0);
        assert_eq!(sieve.count(17, 1).unwrap(), 0);
        assert_eq!(sieve.count(10, 5).unwrap(), 0);
    }

    #[test]
    fn test_single_prime_range() {
        let sieve = SegmentSieve::new();
        assert_eq!(sieve.count(2, 2).unwrap(), 1);
        assert_eq!(sieve.count(97, 97).unwrap(), 1);
    }

    #[test]
    fn test_fully_composite_window() {
        let sieve = SegmentSieve::new();
        assert_eq!(sieve.count(24, 28).unwrap(), 0);
        assert_eq!(sieve.count(90, 96).unwrap(), 0);
    }

    #[test]
    fn test_base_prime_inside_segment_survives() {
        // every base prime of these ranges lies inside the range itself
        let sieve = SegmentSieve::new();
        assert_eq!(sieve.count(2, 10).unwrap(), 4);
        assert_eq!(sieve.count(0, 100).unwrap(), 25);
        assert_eq!(sieve.count(3, 9).unwrap(), 3);
    }

    #[test]
    fn test_matches_oracle_on_small_ranges() {
        let sieve = SegmentSieve::new();
        for (start, end) in [
            (0, 30),
            (1, 1_000),
            (100, 200),
            (990, 1_010),
            (9_973, 9_973),
            (10_000, 10_500),
            (65_500, 65_600),
        ] {
            assert_eq!(
                sieve.count(start, end).unwrap(),
                oracle(start, end),
                "range [{start}, {end}]"
            );
        }
    }

    #[test]
    fn test_high_segment_far_from_origin() {
        // primes in [10^12, 10^12 + 1000]: window checked against the oracle
        let start = 1_000_000_000_000;
        let sieve = SegmentSieve::new();
        assert_eq!(sieve.count(start, start + 1_000).unwrap(), oracle(start, start + 1_000));
    }

    #[test]
    fn test_idempotent() {
        let sieve = SegmentSieve::new();
        let first = sieve.count(1, 50_000).unwrap();
        let second = sieve.count(1, 50_000).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_counter_trait_delegates() {
        let sieve = SegmentSieve::new();
        let via_trait = PrimeCounter::count(&sieve, &1u64, &1_000u64).unwrap();
        assert_eq!(via_trait, 168);
    }

    #[test]
    fn test_first_multiple_at_or_above() {
        assert_eq!(first_multiple_at_or_above(7, 14), Some(14));
        assert_eq!(first_multiple_at_or_above(7, 15), Some(21));
        assert_eq!(first_multiple_at_or_above(7, 1), Some(7));
        assert_eq!(first_multiple_at_or_above(2, u64::MAX), None);
    }
}
