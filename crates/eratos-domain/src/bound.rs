//! The bound-integer capability interface
//!
//! Ranges are parameterized over the integer type of their bounds. The
//! partitioner and the engines only need a small set of exact operations,
//! captured here, so the same algorithms run over native `u64` bounds and
//! over arbitrary-precision bounds without change.

use malachite::num::arithmetic::traits::FloorSqrt;
use malachite::Natural;
use std::fmt::{Debug, Display};

/// Exact integer operations required of a range bound.
///
/// Implementations must be exact for all values: no rounding, no silent
/// wrapping. Subtraction is only invoked with `self >= rhs` and division
/// with a non-zero divisor; both are preconditions on the caller.
pub trait RangeInt: Clone + Ord + Debug + Display + Send + Sync + Sized {
    /// Widen a native integer into this bound type.
    fn from_u64(value: u64) -> Self;

    /// `self + rhs`
    fn add(&self, rhs: &Self) -> Self;

    /// `self - rhs`, requires `self >= rhs`
    fn sub(&self, rhs: &Self) -> Self;

    /// `self * rhs`
    fn mul(&self, rhs: &Self) -> Self;

    /// `floor(self / rhs)`, requires `rhs != 0`
    fn div_floor(&self, rhs: &Self) -> Self;

    /// `floor(sqrt(self))`
    fn floor_sqrt(&self) -> Self;

    /// Narrow to `u64`, `None` when the value does not fit.
    fn to_u64(&self) -> Option<u64>;

    /// Narrow to `usize`, `None` when the value does not fit.
    fn to_usize(&self) -> Option<usize>;
}

impl RangeInt for u64 {
    fn from_u64(value: u64) -> Self {
        value
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div_floor(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn floor_sqrt(&self) -> Self {
        self.isqrt()
    }

    fn to_u64(&self) -> Option<u64> {
        Some(*self)
    }

    fn to_usize(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

impl RangeInt for Natural {
    fn from_u64(value: u64) -> Self {
        Natural::from(value)
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div_floor(&self, rhs: &Self) -> Self {
        // Natural division truncates, which is floor for non-negative values
        self / rhs
    }

    fn floor_sqrt(&self) -> Self {
        FloorSqrt::floor_sqrt(self.clone())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_usize(&self) -> Option<usize> {
        usize::try_from(self).ok()
    }
}
