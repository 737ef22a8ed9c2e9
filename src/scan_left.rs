use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator yielding every intermediate result of a left fold
///
/// Yields `zero` first, then the accumulator after folding in each source
/// element, so the output is one element longer than the source. Source
/// elements are folded only when the matching output is requested.
pub struct ScanLeft<C, B, F> {
    cursor: C,
    accumulator: B,
    folder: F,
    emitted_zero: bool,
}

impl<C, B, F> ScanLeft<C, B, F> {
    pub fn new(cursor: C, zero: B, folder: F) -> Self {
        ScanLeft {
            cursor,
            accumulator: zero,
            folder,
            emitted_zero: false,
        }
    }
}

impl<C, B, F> Cursor for ScanLeft<C, B, F>
where
    C: Cursor,
    B: Clone,
    F: FnMut(&B, C::Element) -> B,
{
    type Element = B;

    fn has_next(&mut self) -> bool {
        !self.emitted_zero || self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.emitted_zero {
            self.emitted_zero = true;
            return Ok(self.accumulator.clone());
        }

        let element = self
            .cursor
            .try_next()
            .map_err(|_| IterCombError::exhausted("scan_left"))?;
        self.accumulator = (self.folder)(&self.accumulator, element);
        Ok(self.accumulator.clone())
    }
}

/// Convenience function to create a ScanLeft cursor
pub fn scan_left<C, B, F>(cursor: C, zero: B, folder: F) -> ScanLeft<C, B, F>
where
    C: Cursor,
    B: Clone,
    F: FnMut(&B, C::Element) -> B,
{
    ScanLeft::new(cursor, zero, folder)
}

/// Extension trait to add .scan_left() method support for cursors
pub trait ScanLeftExt: Cursor + Sized {
    fn scan_left<B, F>(self, zero: B, folder: F) -> ScanLeft<Self, B, F>
    where
        B: Clone,
        F: FnMut(&B, Self::Element) -> B,
    {
        ScanLeft::new(self, zero, folder)
    }
}

impl<C> ScanLeftExt for C where C: Cursor {}
