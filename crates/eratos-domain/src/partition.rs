//! Splitting a range into per-worker blocks
//!
//! The partition is the contract the whole distribution protocol rests on:
//! blocks are contiguous, pairwise disjoint, and their union is exactly the
//! original range, so the sum of per-block prime counts equals the count
//! over the whole range.

use crate::bound::RangeInt;
use crate::range::Range;
use std::num::NonZeroUsize;

/// One contiguous block of a partitioned range.
///
/// A block is identified by its first value and its width. When there are
/// more workers than values in the range, the leading workers receive
/// zero-width blocks; those have no bounds and count zero primes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<T> {
    start: T,
    len: T,
}

impl<T: RangeInt> Block<T> {
    /// First value of the block.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Number of values in the block.
    pub fn len(&self) -> &T {
        &self.len
    }

    /// Whether the block holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == T::from_u64(0)
    }

    /// Inclusive `(start, end)` bounds, or `None` for a zero-width block.
    pub fn bounds(&self) -> Option<(T, T)> {
        if self.is_empty() {
            return None;
        }
        let end = self.start.add(&self.len.sub(&T::from_u64(1)));
        Some((self.start.clone(), end))
    }
}

/// An ordered sequence of blocks covering a range exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    blocks: Vec<Block<T>>,
}

impl<T: RangeInt> Partition<T> {
    /// Number of blocks, equal to the worker count it was built for.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the partition holds no blocks. Never true for a partition
    /// produced by [`RangePartitioner::partition`].
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate the blocks in worker order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block<T>> {
        self.blocks.iter()
    }

    /// Block assigned to the given worker index.
    pub fn get(&self, worker: usize) -> Option<&Block<T>> {
        self.blocks.get(worker)
    }
}

/// Splits a global range into one block per worker.
pub struct RangePartitioner;

impl RangePartitioner {
    /// Partition `range` into `workers` contiguous blocks.
    ///
    /// Every worker except the last receives exactly
    /// `floor(width / workers)` values, in order from `range.start()`. The
    /// last worker absorbs the remainder of the integer division and always
    /// ends at `range.end()`. A single worker therefore receives the whole
    /// range, which is how sequential execution is modeled.
    pub fn partition<T: RangeInt>(range: &Range<T>, workers: NonZeroUsize) -> Partition<T> {
        let n = workers.get();
        let total = range.width();
        let block = total.div_floor(&T::from_u64(n as u64));

        let mut blocks = Vec::with_capacity(n);
        let mut cursor = range.start().clone();
        for _ in 0..n - 1 {
            blocks.push(Block {
                start: cursor.clone(),
                len: block.clone(),
            });
            cursor = cursor.add(&block);
        }

        // last block: everything not yet assigned, through range.end()
        let consumed = block.mul(&T::from_u64((n - 1) as u64));
        blocks.push(Block {
            start: cursor,
            len: total.sub(&consumed),
        });

        Partition { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use malachite::Natural;
    use proptest::prelude::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Check contiguity, disjointness, and exact reconstruction of `range`.
    fn assert_covers<T: RangeInt>(partition: &Partition<T>, range: &Range<T>) {
        let mut cursor = range.start().clone();
        let mut width = T::from_u64(0);
        for block in partition.blocks() {
            assert_eq!(block.start(), &cursor);
            cursor = cursor.add(block.len());
            width = width.add(block.len());
        }
        assert_eq!(width, range.width());
        assert_eq!(cursor, range.end().add(&T::from_u64(1)));
    }

    #[test]
    fn test_single_worker_gets_whole_range() {
        let range = Range::new(1u64, 100u64).unwrap();
        let partition = RangePartitioner::partition(&range, nz(1));
        assert_eq!(partition.len(), 1);
        let (start, end) = partition.get(0).unwrap().bounds().unwrap();
        assert_eq!((start, end), (1, 100));
    }

    #[test]
    fn test_even_split() {
        let range = Range::new(1u64, 100u64).unwrap();
        let partition = RangePartitioner::partition(&range, nz(4));
        let bounds: Vec<_> = partition
            .blocks()
            .map(|b| b.bounds().unwrap())
            .collect();
        assert_eq!(bounds, vec![(1, 25), (26, 50), (51, 75), (76, 100)]);
    }

    #[test]
    fn test_last_worker_absorbs_remainder() {
        let range = Range::new(0u64, 101u64).unwrap();
        let partition = RangePartitioner::partition(&range, nz(4));
        let bounds: Vec<_> = partition
            .blocks()
            .map(|b| b.bounds().unwrap())
            .collect();
        assert_eq!(bounds, vec![(0, 24), (25, 49), (50, 74), (75, 101)]);
    }

    #[test]
    fn test_reference_block_layout() {
        // the 4-way split of [1, 10^8] used by the default configuration
        let range = Range::new(1u64, 100_000_000u64).unwrap();
        let partition = RangePartitioner::partition(&range, nz(4));
        let bounds: Vec<_> = partition
            .blocks()
            .map(|b| b.bounds().unwrap())
            .collect();
        assert_eq!(
            bounds,
            vec![
                (1, 25_000_000),
                (25_000_001, 50_000_000),
                (50_000_001, 75_000_000),
                (75_000_001, 100_000_000),
            ]
        );
    }

    #[test]
    fn test_more_workers_than_values() {
        let range = Range::new(5u64, 7u64).unwrap();
        let partition = RangePartitioner::partition(&range, nz(7));
        assert_eq!(partition.len(), 7);
        assert_covers(&partition, &range);
        // all values end up in the last block; the rest are empty
        for block in partition.blocks().take(6) {
            assert!(block.is_empty());
            assert!(block.bounds().is_none());
        }
        let (start, end) = partition.get(6).unwrap().bounds().unwrap();
        assert_eq!((start, end), (5, 7));
    }

    #[test]
    fn test_covers_for_small_worker_counts() {
        let range = Range::new(1u64, 1000u64).unwrap();
        for n in [1, 2, 3, 4, 7] {
            let partition = RangePartitioner::partition(&range, nz(n));
            assert_eq!(partition.len(), n);
            assert_covers(&partition, &range);
        }
    }

    #[test]
    fn test_natural_bounds() {
        let start = Natural::from(10u64).mul(&Natural::from(u64::MAX));
        let end = start.add(&Natural::from(100_000u64));
        let range = Range::new(start, end).unwrap();
        let partition = RangePartitioner::partition(&range, nz(4));
        assert_eq!(partition.len(), 4);
        assert_covers(&partition, &range);
    }

    proptest! {
        #[test]
        fn prop_partition_reconstructs_range(
            start in 0u64..1_000_000,
            width in 0u64..1_000_000,
            workers in 1usize..32,
        ) {
            let range = Range::new(start, start + width).unwrap();
            let partition = RangePartitioner::partition(&range, nz(workers));
            prop_assert_eq!(partition.len(), workers);
            assert_covers(&partition, &range);
        }

        #[test]
        fn prop_all_but_last_block_equal_width(
            start in 0u64..1_000_000,
            width in 1u64..1_000_000,
            workers in 1usize..32,
        ) {
            let range = Range::new(start, start + width - 1).unwrap();
            let partition = RangePartitioner::partition(&range, nz(workers));
            let expected = width / workers as u64;
            for block in partition.blocks().take(workers - 1) {
                prop_assert_eq!(*block.len(), expected);
            }
        }
    }
}
