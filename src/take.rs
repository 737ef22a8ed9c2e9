use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator yielding at most the first `n` elements of its source
pub struct Take<C> {
    cursor: C,
    remaining: usize,
}

impl<C> Take<C> {
    pub fn new(cursor: C, n: usize) -> Self {
        Take {
            cursor,
            remaining: n,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.has_next() {
            return Err(IterCombError::exhausted("take"));
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            tracing::trace!("take limit reached");
        }
        self.cursor
            .try_next()
            .map_err(|_| IterCombError::exhausted("take"))
    }
}

/// Convenience function to create a Take cursor
pub fn take<C: Cursor>(cursor: C, n: usize) -> Take<C> {
    Take::new(cursor, n)
}

/// Extension trait to add .take() method support for cursors
pub trait TakeExt: Cursor + Sized {
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }
}

impl<C> TakeExt for C where C: Cursor {}
