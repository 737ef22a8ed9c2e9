use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use crate::pair::Pair;

/// Cursor combinator pairing elements of two cursors positionally
///
/// Ends as soon as either side ends. The right side is only probed when the
/// left side has an element.
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Zip { left, right }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Element = Pair<A::Element, B::Element>;

    fn has_next(&mut self) -> bool {
        self.left.has_next() && self.right.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.has_next() {
            return Err(IterCombError::exhausted("zip"));
        }
        let left = self
            .left
            .try_next()
            .map_err(|_| IterCombError::exhausted("zip"))?;
        let right = self
            .right
            .try_next()
            .map_err(|_| IterCombError::exhausted("zip"))?;
        Ok(Pair::new(left, right))
    }
}

/// Convenience function to create a Zip cursor
pub fn zip<A: Cursor, B: Cursor>(left: A, right: B) -> Zip<A, B> {
    Zip::new(left, right)
}

/// Extension trait to add .zip() method support for cursors
pub trait ZipExt: Cursor + Sized {
    fn zip<B: Cursor>(self, other: B) -> Zip<Self, B> {
        Zip::new(self, other)
    }
}

impl<C> ZipExt for C where C: Cursor {}
