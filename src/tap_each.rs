use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator that runs a side effect on each element as it is produced
///
/// The action runs inside `try_next`, never inside `has_next`.
pub struct TapEach<C, F> {
    cursor: C,
    action: F,
}

impl<C, F> TapEach<C, F> {
    pub fn new(cursor: C, action: F) -> Self {
        TapEach { cursor, action }
    }
}

impl<C, F> Cursor for TapEach<C, F>
where
    C: Cursor,
    F: FnMut(&C::Element),
{
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        let element = self
            .cursor
            .try_next()
            .map_err(|_| IterCombError::exhausted("tap_each"))?;
        (self.action)(&element);
        Ok(element)
    }
}

/// Convenience function to create a TapEach cursor
pub fn tap_each<C, F>(cursor: C, action: F) -> TapEach<C, F>
where
    C: Cursor,
    F: FnMut(&C::Element),
{
    TapEach::new(cursor, action)
}

/// Extension trait to add .tap_each() method support for cursors
pub trait TapEachExt: Cursor + Sized {
    fn tap_each<F>(self, action: F) -> TapEach<Self, F>
    where
        F: FnMut(&Self::Element),
    {
        TapEach::new(self, action)
    }
}

impl<C> TapEachExt for C where C: Cursor {}
