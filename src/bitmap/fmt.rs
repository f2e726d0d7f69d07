use core::fmt;

use crate::RleBitmap;

impl fmt::Debug for RleBitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.runs().len() < 16 {
            write!(f, "RleBitmap<{:?}>", self.runs())
        } else {
            write!(
                f,
                "RleBitmap<{:?} bits set between {:?} and {:?}>",
                self.len(),
                self.min().unwrap(),
                self.max().unwrap()
            )
        }
    }
}
