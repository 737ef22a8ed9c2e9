use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator that discards the first `n` elements of its source
///
/// The discarding is deferred until the cursor is first polled.
pub struct Skip<C> {
    cursor: C,
    remaining: usize,
}

impl<C> Skip<C> {
    pub fn new(cursor: C, n: usize) -> Self {
        Skip {
            cursor,
            remaining: n,
        }
    }
}

impl<C: Cursor> Skip<C> {
    fn skip_prefix(&mut self) {
        while self.remaining > 0 && self.cursor.next_optional().is_some() {
            self.remaining -= 1;
        }
        // either the prefix is gone or the source ran out first
        self.remaining = 0;
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        if self.remaining > 0 {
            self.skip_prefix();
        }
        self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.has_next() {
            return Err(IterCombError::exhausted("skip"));
        }
        self.cursor
            .try_next()
            .map_err(|_| IterCombError::exhausted("skip"))
    }
}

/// Convenience function to create a Skip cursor
pub fn skip<C: Cursor>(cursor: C, n: usize) -> Skip<C> {
    Skip::new(cursor, n)
}

/// Extension trait to add .skip() method support for cursors
pub trait SkipExt: Cursor + Sized {
    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }
}

impl<C> SkipExt for C where C: Cursor {}
