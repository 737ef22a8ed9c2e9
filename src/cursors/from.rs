use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use std::iter::Fuse;

/// Cursor adapting any standard library iterator
///
/// The iterator is fused and read one element ahead into a single slot, which
/// is what makes `has_next` idempotent. Elements are moved out of the source,
/// never copied.
pub struct FromIter<I: Iterator> {
    iter: Fuse<I>,
    slot: Option<I::Item>,
}

impl<I: Iterator> FromIter<I> {
    pub fn new(iter: I) -> Self {
        FromIter {
            iter: iter.fuse(),
            slot: None,
        }
    }
}

impl<I: Iterator> Cursor for FromIter<I> {
    type Element = I::Item;

    fn has_next(&mut self) -> bool {
        if self.slot.is_none() {
            self.slot = self.iter.next();
        }
        self.slot.is_some()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if self.has_next() {
            if let Some(element) = self.slot.take() {
                return Ok(element);
            }
        }
        Err(IterCombError::exhausted("from"))
    }
}

/// Convenience function to wrap anything iterable in a cursor
pub fn from<S: IntoIterator>(source: S) -> FromIter<S::IntoIter> {
    FromIter::new(source.into_iter())
}
