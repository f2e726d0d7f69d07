use crate::bitmap::merge::{self, Op};
use crate::{MultiOps, RleBitmap};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

impl<I> MultiOps<RleBitmap> for I
where
    I: IntoIterator<Item = RleBitmap>,
{
    type Output = RleBitmap;

    fn union(self) -> Self::Output {
        let bitmaps: Vec<RleBitmap> = self.into_iter().collect();
        let refs: Vec<&RleBitmap> = bitmaps.iter().collect();
        merge::merge(&refs, Op::Union)
    }

    fn intersection(self) -> Self::Output {
        let bitmaps: Vec<RleBitmap> = self.into_iter().collect();
        let refs: Vec<&RleBitmap> = bitmaps.iter().collect();
        merge::merge(&refs, Op::Intersection)
    }

    fn symmetric_difference(self) -> Self::Output {
        let mut iter = self.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first, |lhs, rhs| lhs ^ rhs),
            None => RleBitmap::new(),
        }
    }
}

impl<'a, I> MultiOps<&'a RleBitmap> for I
where
    I: IntoIterator<Item = &'a RleBitmap>,
{
    type Output = RleBitmap;

    fn union(self) -> Self::Output {
        let refs: Vec<&RleBitmap> = self.into_iter().collect();
        merge::merge(&refs, Op::Union)
    }

    fn intersection(self) -> Self::Output {
        let refs: Vec<&RleBitmap> = self.into_iter().collect();
        merge::merge(&refs, Op::Intersection)
    }

    fn symmetric_difference(self) -> Self::Output {
        let mut iter = self.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first.clone(), |lhs, rhs| lhs ^ rhs),
            None => RleBitmap::new(),
        }
    }
}
