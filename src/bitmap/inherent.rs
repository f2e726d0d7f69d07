use crate::bitmap::merge;
use crate::{RleBitmap, UniverseOverflow};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

impl RleBitmap {
    /// The number of bit positions a bitmap is defined over.
    ///
    /// Positions past the last encoded run are zeros up to this bound. The
    /// bound is the largest integer a 64-bit float holds exactly, which
    /// keeps run sequences interchangeable with systems that store them as
    /// doubles.
    pub const UNIVERSE: u64 = (1 << 53) - 1;

    /// Returns the universe bound, the total number of bit positions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// assert_eq!(RleBitmap::universe(), 9_007_199_254_740_991);
    /// ```
    pub const fn universe() -> u64 {
        RleBitmap::UNIVERSE
    }

    /// Creates an empty `RleBitmap`, with every position clear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    /// let rb = RleBitmap::new();
    /// assert!(rb.is_empty());
    /// ```
    pub fn new() -> RleBitmap {
        RleBitmap { runs: Vec::new() }
    }

    /// Creates a full `RleBitmap`, with every position in the universe set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    /// let rb = RleBitmap::full();
    /// assert_eq!(rb.len(), RleBitmap::UNIVERSE);
    /// ```
    pub fn full() -> RleBitmap {
        RleBitmap { runs: [0, RleBitmap::UNIVERSE].to_vec() }
    }

    /// Creates a bitmap from a sequence of run lengths alternating between
    /// zeros and ones, zeros first.
    ///
    /// The sequence does not have to be canonical: zero-length runs and a
    /// trailing run of zeros are accepted and normalized away.
    ///
    /// # Errors
    ///
    /// Fails when the runs extend past [`RleBitmap::UNIVERSE`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![0, 4, 0, 3, 5])?;
    /// assert_eq!(rb.runs(), &[0, 7]);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn try_from_runs(runs: Vec<u64>) -> Result<RleBitmap, UniverseOverflow> {
        RleBitmap::try_from_runs_in(runs, RleBitmap::UNIVERSE)
    }

    /// Creates a bitmap from run lengths over a caller-chosen universe
    /// bound, for callers that keep their bitmaps over a smaller domain.
    ///
    /// Bounds above [`RleBitmap::UNIVERSE`] are capped to it.
    ///
    /// # Errors
    ///
    /// Fails when the runs extend past `universe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// assert!(RleBitmap::try_from_runs_in(vec![6, 5], 10).is_err());
    /// assert!(RleBitmap::try_from_runs_in(vec![6, 5], 11).is_ok());
    /// ```
    pub fn try_from_runs_in(
        runs: Vec<u64>,
        universe: u64,
    ) -> Result<RleBitmap, UniverseOverflow> {
        let universe = universe.min(RleBitmap::UNIVERSE);
        let mut total: u64 = 0;
        for (idx, &run) in runs.iter().enumerate() {
            total = match total.checked_add(run) {
                Some(total) if total <= universe => total,
                _ => return Err(UniverseOverflow { valid_until: idx }),
            };
        }
        Ok(RleBitmap { runs: merge::canonicalize(&runs) })
    }

    /// Returns the canonical run lengths, alternating zeros and ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![10, 2])?;
    /// assert_eq!(rb.runs(), &[10, 2]);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn runs(&self) -> &[u64] {
        &self.runs
    }

    /// Consumes the bitmap and returns its canonical run lengths.
    pub fn into_runs(self) -> Vec<u64> {
        self.runs
    }

    /// Returns `true` if every position is clear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// assert!(RleBitmap::new().is_empty());
    /// assert!(RleBitmap::try_from_runs(vec![10])?.is_empty());
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the number of set positions in the bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![10, 2, 3, 4])?;
    /// assert_eq!(rb.len(), 6);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn len(&self) -> u64 {
        self.runs.iter().skip(1).step_by(2).sum()
    }

    /// Returns the lowest set position in the bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![10, 2])?;
    /// assert_eq!(rb.min(), Some(10));
    /// assert_eq!(RleBitmap::new().min(), None);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn min(&self) -> Option<u64> {
        self.runs.first().copied()
    }

    /// Returns the highest set position in the bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![10, 2])?;
    /// assert_eq!(rb.max(), Some(11));
    /// assert_eq!(RleBitmap::new().max(), None);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn max(&self) -> Option<u64> {
        if self.runs.is_empty() {
            None
        } else {
            Some(self.runs.iter().sum::<u64>() - 1)
        }
    }

    /// Returns the complement of the bitmap over the default universe.
    ///
    /// Every zero becomes a one and vice versa across all
    /// [`RleBitmap::UNIVERSE`] positions; the implicit zeros past the last
    /// encoded run come back as a trailing run of ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![10, 2])?;
    /// let flipped = rb.complement();
    ///
    /// assert_eq!(flipped.runs(), &[0, 10, 2, RleBitmap::UNIVERSE - 12]);
    /// assert_eq!(flipped.complement(), rb);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn complement(&self) -> RleBitmap {
        // construction keeps every bitmap within the default universe
        self.flip(RleBitmap::UNIVERSE)
    }

    /// Returns the complement over a caller-chosen universe bound.
    ///
    /// Bounds above [`RleBitmap::UNIVERSE`] are capped to it.
    ///
    /// # Errors
    ///
    /// Fails when the encoded runs extend past `universe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb = RleBitmap::try_from_runs(vec![2, 2])?;
    /// assert_eq!(rb.complement_in(10)?.runs(), &[0, 2, 2, 6]);
    /// assert!(rb.complement_in(3).is_err());
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn complement_in(&self, universe: u64) -> Result<RleBitmap, UniverseOverflow> {
        let universe = universe.min(RleBitmap::UNIVERSE);
        let mut total: u64 = 0;
        for (idx, &run) in self.runs.iter().enumerate() {
            total += run;
            if total > universe {
                return Err(UniverseOverflow { valid_until: idx });
            }
        }
        Ok(self.flip(universe))
    }

    /// The complement core. The caller checks that the runs fit within
    /// `universe`.
    fn flip(&self, universe: u64) -> RleBitmap {
        let mut out = Vec::with_capacity(self.runs.len() + 2);
        let mut extent: u64 = 0;
        for (idx, &run) in self.runs.iter().enumerate() {
            extent += run;
            if idx % 2 == 0 {
                merge::push_ones(&mut out, run);
            } else {
                merge::push_zeros(&mut out, run);
            }
        }
        debug_assert!(extent <= universe);
        // positions past the encoded prefix were zeros, they flip to ones
        merge::push_ones(&mut out, universe - extent);
        merge::strip_trailing_zeros(&mut out);
        RleBitmap { runs: out }
    }
}

impl Default for RleBitmap {
    fn default() -> RleBitmap {
        RleBitmap::new()
    }
}
