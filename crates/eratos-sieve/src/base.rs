//! Base sieve of Eratosthenes

use crate::error::SieveError;

/// A dense primality table over `0..=limit`.
///
/// Entry `i` is `true` iff `i` is prime; entries only ever flip from `true`
/// to `false` during construction. The table is the base sieve of the
/// segmented algorithm: it is built up to the square root of a range's
/// upper bound and supplies the marking primes for the segment pass.
pub struct PrimalityTable {
    limit: u64,
    entries: Vec<bool>,
}

impl PrimalityTable {
    /// Sieve all primes in `0..=limit`.
    ///
    /// A `limit` below 2 yields a table with no prime entries. Fails with
    /// [`SieveError::OutOfMemory`] when the allocator refuses the table and
    /// [`SieveError::CapacityExceeded`] when `limit + 1` entries cannot be
    /// indexed.
    pub fn build(limit: u64) -> Result<Self, SieveError> {
        let len = usize::try_from(limit)
            .ok()
            .and_then(|l| l.checked_add(1))
            .ok_or_else(|| SieveError::CapacityExceeded {
                width: format!("{}", u128::from(limit) + 1),
            })?;

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(len)
            .map_err(|_| SieveError::OutOfMemory { entries: len })?;
        entries.resize(len, true);

        entries[0] = false;
        if len > 1 {
            entries[1] = false;
        }

        let mut i = 2usize;
        while i * i < len {
            if entries[i] {
                let mut j = i * i;
                while j < len {
                    entries[j] = false;
                    j += i;
                }
            }
            i += 1;
        }

        Ok(Self { limit, entries })
    }

    /// Upper bound the table was built for.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether `n` is prime. Values above the limit are not represented and
    /// report `false`.
    pub fn is_prime(&self, n: u64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.entries.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the primes in the table in increasing order.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, &prime)| prime)
            .map(|(i, _)| i as u64)
    }
}
