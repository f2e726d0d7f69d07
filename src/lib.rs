//! Boolean algebra over run-length encoded bitmaps.
//!
//! A bitmap is an ordered sequence of run lengths alternating between runs
//! of clear bits and runs of set bits, always starting with the clear run:
//! `[10, 2]` is ten zeros followed by two ones. Positions past the last
//! encoded run are zeros, up to the universe bound
//! [`RleBitmap::UNIVERSE`].
//!
//! The four primitive operations are exposed through the usual operator
//! traits for the binary forms and through [`MultiOps`] for the variadic
//! forms. Operations never mutate their inputs and always return a fresh,
//! canonical bitmap.
//!
//! # Examples
//!
//! ```rust
//! use rle_bitmap::{MultiOps, RleBitmap};
//!
//! let a = RleBitmap::try_from_runs(vec![10, 2])?;
//! let b = RleBitmap::try_from_runs(vec![0, 4, 12, 2])?;
//!
//! assert_eq!((&a | &b).runs(), &[0, 4, 6, 2, 4, 2]);
//! assert!((&a & &b).is_empty());
//! assert_eq!([&a, &b].symmetric_difference(), &a | &b);
//! assert_eq!((!&a).min(), Some(0));
//! # Ok::<(), rle_bitmap::UniverseOverflow>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use core::fmt;

mod bitmap;

pub use crate::bitmap::Ranges;
pub use crate::bitmap::RleBitmap;

/// A [`IntoIterator`] blanket trait for computing one Boolean operation over
/// any number of bitmaps in a single call.
///
/// OR and AND walk all the inputs in one merge pass; XOR is folded pairwise.
///
/// # Examples
///
/// ```rust
/// use rle_bitmap::{MultiOps, RleBitmap};
///
/// let bitmaps = vec![
///     RleBitmap::try_from_runs(vec![0, 4])?,
///     RleBitmap::try_from_runs(vec![2, 4])?,
/// ];
///
/// assert_eq!(bitmaps.union().runs(), &[0, 6]);
/// # Ok::<(), rle_bitmap::UniverseOverflow>(())
/// ```
pub trait MultiOps<T>: IntoIterator<Item = T> {
    /// The type of output from operations.
    type Output;

    /// The `union` of all the bitmaps, an empty bitmap when there are none.
    fn union(self) -> Self::Output;

    /// The `intersection` of all the bitmaps, an empty bitmap when there are
    /// none.
    fn intersection(self) -> Self::Output;

    /// The `symmetric difference` of all the bitmaps, an empty bitmap when
    /// there are none.
    fn symmetric_difference(self) -> Self::Output;
}

/// An error type produced when a run sequence extends past the universe
/// bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseOverflow {
    valid_until: usize,
}

impl UniverseOverflow {
    /// Returns the number of leading runs that stay within the universe.
    pub fn valid_until(&self) -> usize {
        self.valid_until
    }
}

impl fmt::Display for UniverseOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "runs stay within the universe up to the {}th run", self.valid_until())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UniverseOverflow {}

/// An error type produced when building a bitmap from ranges that are not
/// ascending, disjoint and within the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRanges {
    valid_until: usize,
}

impl InvalidRanges {
    /// Returns the number of leading ranges that were valid.
    pub fn valid_until(&self) -> usize {
        self.valid_until
    }
}

impl fmt::Display for InvalidRanges {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ranges are ascending, disjoint and within the universe up to the {}th range",
            self.valid_until()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidRanges {}
