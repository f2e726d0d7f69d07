use core::ops::Range;

use crate::bitmap::merge;
use crate::{InvalidRanges, RleBitmap};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// An iterator over the maximal ranges of set positions in a bitmap,
/// ascending.
pub struct Ranges<'a> {
    runs: &'a [u64],
    position: u64,
}

impl<'a> Iterator for Ranges<'a> {
    type Item = Range<u64>;

    fn next(&mut self) -> Option<Range<u64>> {
        // canonical sequences hold complete (zeros, ones) pairs
        let (&zeros, rest) = self.runs.split_first()?;
        let (&ones, rest) = rest.split_first()?;
        let start = self.position + zeros;
        let end = start + ones;
        self.position = end;
        self.runs = rest;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ranges = self.runs.len() / 2;
        (ranges, Some(ranges))
    }
}

impl ExactSizeIterator for Ranges<'_> {}

impl RleBitmap {
    /// Returns an iterator over the maximal ranges of set positions, in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![10, 2, 3, 4])?;
    /// let ranges: Vec<_> = rb.ranges().collect();
    ///
    /// assert_eq!(ranges, vec![10..12, 15..19]);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn ranges(&self) -> Ranges<'_> {
        Ranges { runs: &self.runs, position: 0 }
    }

    /// Creates a bitmap from ascending, non-overlapping ranges of set
    /// positions.
    ///
    /// Adjacent and empty ranges are accepted and coalesced.
    ///
    /// # Errors
    ///
    /// Fails when a range starts before the end of its predecessor, is
    /// backwards, or extends past [`RleBitmap::UNIVERSE`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::from_sorted_ranges(vec![10..12, 15..19])?;
    /// assert_eq!(rb.runs(), &[10, 2, 3, 4]);
    ///
    /// assert!(RleBitmap::from_sorted_ranges(vec![10..12, 5..8]).is_err());
    /// # Ok::<(), rle_bitmap::InvalidRanges>(())
    /// ```
    pub fn from_sorted_ranges<I>(ranges: I) -> Result<RleBitmap, InvalidRanges>
    where
        I: IntoIterator<Item = Range<u64>>,
    {
        let mut runs = Vec::new();
        let mut position: u64 = 0;
        for (valid_until, range) in ranges.into_iter().enumerate() {
            if range.start < position
                || range.end < range.start
                || range.end > RleBitmap::UNIVERSE
            {
                return Err(InvalidRanges { valid_until });
            }
            merge::push_zeros(&mut runs, range.start - position);
            merge::push_ones(&mut runs, range.end - range.start);
            position = range.end;
        }
        merge::strip_trailing_zeros(&mut runs);
        Ok(RleBitmap { runs })
    }
}
