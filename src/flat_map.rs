use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator that maps every element to a cursor and flattens the results
///
/// Holds at most one sub-cursor at a time. A new source element is pulled only
/// once the current sub-cursor is exhausted, so an element mapped to an empty
/// cursor contributes nothing.
pub struct FlatMap<C, F, I> {
    cursor: C,
    mapper: F,
    current: Option<I>,
    exhausted: bool,
}

impl<C, F, I> FlatMap<C, F, I> {
    pub fn new(cursor: C, mapper: F) -> Self {
        FlatMap {
            cursor,
            mapper,
            current: None,
            exhausted: false,
        }
    }
}

impl<C, F, I> Cursor for FlatMap<C, F, I>
where
    C: Cursor,
    F: FnMut(C::Element) -> I,
    I: Cursor,
{
    type Element = I::Element;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(inner) = &mut self.current {
                if inner.has_next() {
                    return true;
                }
            }
            if self.exhausted {
                return false;
            }

            match self.cursor.next_optional() {
                Some(element) => {
                    tracing::trace!("flat_map switching to next sub-cursor");
                    self.current = Some((self.mapper)(element));
                }
                None => {
                    tracing::trace!("flat_map source exhausted");
                    self.current = None;
                    self.exhausted = true;
                    return false;
                }
            }
        }
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if self.has_next() {
            if let Some(inner) = &mut self.current {
                return inner
                    .try_next()
                    .map_err(|_| IterCombError::exhausted("flat_map"));
            }
        }
        Err(IterCombError::exhausted("flat_map"))
    }
}

/// Convenience function to create a FlatMap cursor
pub fn flat_map<C, F, I>(cursor: C, mapper: F) -> FlatMap<C, F, I>
where
    C: Cursor,
    F: FnMut(C::Element) -> I,
    I: Cursor,
{
    FlatMap::new(cursor, mapper)
}

/// Extension trait to add .flat_map() method support for cursors
pub trait FlatMapExt: Cursor + Sized {
    fn flat_map<F, I>(self, mapper: F) -> FlatMap<Self, F, I>
    where
        F: FnMut(Self::Element) -> I,
        I: Cursor,
    {
        FlatMap::new(self, mapper)
    }
}

impl<C> FlatMapExt for C where C: Cursor {}
