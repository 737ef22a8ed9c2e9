use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use crate::pair::Pair;

/// Cursor combinator pairing each element with its zero-based position
pub struct ZipWithIndex<C> {
    cursor: C,
    index: usize,
}

impl<C> ZipWithIndex<C> {
    pub fn new(cursor: C) -> Self {
        ZipWithIndex { cursor, index: 0 }
    }
}

impl<C: Cursor> Cursor for ZipWithIndex<C> {
    type Element = Pair<C::Element, usize>;

    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        let element = self
            .cursor
            .try_next()
            .map_err(|_| IterCombError::exhausted("zip_with_index"))?;
        let index = self.index;
        self.index += 1;
        Ok(Pair::new(element, index))
    }
}

/// Convenience function to create a ZipWithIndex cursor
pub fn zip_with_index<C: Cursor>(cursor: C) -> ZipWithIndex<C> {
    ZipWithIndex::new(cursor)
}

/// Extension trait to add .zip_with_index() method support for cursors
pub trait ZipWithIndexExt: Cursor + Sized {
    fn zip_with_index(self) -> ZipWithIndex<Self> {
        ZipWithIndex::new(self)
    }
}

impl<C> ZipWithIndexExt for C where C: Cursor {}
