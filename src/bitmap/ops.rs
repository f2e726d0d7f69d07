use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::bitmap::merge::{self, Op};
use crate::RleBitmap;

impl BitOr<&RleBitmap> for &RleBitmap {
    type Output = RleBitmap;

    /// A `union` between two bitmaps.
    fn bitor(self, rhs: &RleBitmap) -> RleBitmap {
        merge::merge(&[self, rhs], Op::Union)
    }
}

impl BitOr<RleBitmap> for RleBitmap {
    type Output = RleBitmap;

    /// A `union` between two bitmaps.
    fn bitor(self, rhs: RleBitmap) -> RleBitmap {
        BitOr::bitor(&self, &rhs)
    }
}

impl BitOr<&RleBitmap> for RleBitmap {
    type Output = RleBitmap;

    /// A `union` between two bitmaps.
    fn bitor(self, rhs: &RleBitmap) -> RleBitmap {
        BitOr::bitor(&self, rhs)
    }
}

impl BitOr<RleBitmap> for &RleBitmap {
    type Output = RleBitmap;

    /// A `union` between two bitmaps.
    fn bitor(self, rhs: RleBitmap) -> RleBitmap {
        BitOr::bitor(self, &rhs)
    }
}

impl BitAnd<&RleBitmap> for &RleBitmap {
    type Output = RleBitmap;

    /// An `intersection` between two bitmaps.
    fn bitand(self, rhs: &RleBitmap) -> RleBitmap {
        merge::merge(&[self, rhs], Op::Intersection)
    }
}

impl BitAnd<RleBitmap> for RleBitmap {
    type Output = RleBitmap;

    /// An `intersection` between two bitmaps.
    fn bitand(self, rhs: RleBitmap) -> RleBitmap {
        BitAnd::bitand(&self, &rhs)
    }
}

impl BitAnd<&RleBitmap> for RleBitmap {
    type Output = RleBitmap;

    /// An `intersection` between two bitmaps.
    fn bitand(self, rhs: &RleBitmap) -> RleBitmap {
        BitAnd::bitand(&self, rhs)
    }
}

impl BitAnd<RleBitmap> for &RleBitmap {
    type Output = RleBitmap;

    /// An `intersection` between two bitmaps.
    fn bitand(self, rhs: RleBitmap) -> RleBitmap {
        BitAnd::bitand(self, &rhs)
    }
}

impl BitXor<&RleBitmap> for &RleBitmap {
    type Output = RleBitmap;

    /// A `symmetric difference` between two bitmaps.
    ///
    /// A position is set in the output when it is set in exactly one input:
    /// set somewhere, and clear somewhere.
    fn bitxor(self, rhs: &RleBitmap) -> RleBitmap {
        let set_somewhere = self | rhs;
        let clear_somewhere = &self.complement() | &rhs.complement();
        &set_somewhere & &clear_somewhere
    }
}

impl BitXor<RleBitmap> for RleBitmap {
    type Output = RleBitmap;

    /// A `symmetric difference` between two bitmaps.
    fn bitxor(self, rhs: RleBitmap) -> RleBitmap {
        BitXor::bitxor(&self, &rhs)
    }
}

impl BitXor<&RleBitmap> for RleBitmap {
    type Output = RleBitmap;

    /// A `symmetric difference` between two bitmaps.
    fn bitxor(self, rhs: &RleBitmap) -> RleBitmap {
        BitXor::bitxor(&self, rhs)
    }
}

impl BitXor<RleBitmap> for &RleBitmap {
    type Output = RleBitmap;

    /// A `symmetric difference` between two bitmaps.
    fn bitxor(self, rhs: RleBitmap) -> RleBitmap {
        BitXor::bitxor(self, &rhs)
    }
}

impl Not for &RleBitmap {
    type Output = RleBitmap;

    /// The `complement` of the bitmap over the default universe.
    fn not(self) -> RleBitmap {
        self.complement()
    }
}

impl Not for RleBitmap {
    type Output = RleBitmap;

    /// The `complement` of the bitmap over the default universe.
    fn not(self) -> RleBitmap {
        self.complement()
    }
}
