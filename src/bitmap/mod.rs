mod fmt;
mod merge;
mod proptests;

// Order of these modules matters as it determines the `impl` blocks order in
// the docs
mod inherent;
mod iter;
mod multiops;
mod ops;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "std")]
mod serialization;

pub use self::iter::Ranges;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A bitmap kept in run-length form.
///
/// The bitmap is a sequence of run lengths over the conceptual bit stream,
/// alternating between runs of zeros and runs of ones and always opening
/// with the zeros run: `[10, 2]` is ten clear bits followed by two set bits.
/// Positions past the last encoded run are zeros, up to
/// [`UNIVERSE`](RleBitmap::UNIVERSE) positions in total.
///
/// The stored sequence is canonical: no zero-length run apart from a leading
/// one, and no trailing run of zeros. Construction normalizes any sequence
/// into that shape, so equality is structural.
///
/// # Examples
///
/// ```rust
/// use rle_bitmap::RleBitmap;
///
/// let a = RleBitmap::try_from_runs(vec![10, 2])?;
/// let b = RleBitmap::try_from_runs(vec![15, 1])?;
///
/// assert_eq!((&a | &b).runs(), &[10, 2, 3, 1]);
/// # Ok::<(), rle_bitmap::UniverseOverflow>(())
/// ```
#[derive(PartialEq, Eq, Clone)]
pub struct RleBitmap {
    runs: Vec<u64>,
}
