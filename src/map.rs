use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator that transforms every element with a mapping function
pub struct Map<C, F> {
    cursor: C,
    mapper: F,
}

impl<C, F> Map<C, F> {
    pub fn new(cursor: C, mapper: F) -> Self {
        Map { cursor, mapper }
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Element) -> U,
{
    type Element = U;

    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        let element = self
            .cursor
            .try_next()
            .map_err(|_| IterCombError::exhausted("map"))?;
        Ok((self.mapper)(element))
    }
}

/// Convenience function to create a Map cursor
pub fn map<C, F, U>(cursor: C, mapper: F) -> Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Element) -> U,
{
    Map::new(cursor, mapper)
}

/// Extension trait to add .map() method support for cursors
pub trait MapExt: Cursor + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: FnMut(Self::Element) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all cursors
impl<C> MapExt for C where C: Cursor {}
