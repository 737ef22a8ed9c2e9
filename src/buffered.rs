use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor with a non-consuming look at its next element
///
/// The look-ahead slot is filled on the first `head` and handed out by the
/// following `try_next` without pulling the source again.
pub struct Buffered<C: Cursor> {
    cursor: C,
    slot: Option<C::Element>,
}

impl<C: Cursor> Buffered<C> {
    pub fn new(cursor: C) -> Self {
        Buffered { cursor, slot: None }
    }

    /// Look at the next element without advancing past it
    ///
    /// Returns `IterCombError::Empty` if there is no next element.
    pub fn head(&mut self) -> Result<&C::Element> {
        if self.slot.is_none() {
            self.slot = self.cursor.next_optional();
        }
        self.slot
            .as_ref()
            .ok_or_else(|| IterCombError::empty("head"))
    }

    /// Non-failing form of [`Buffered::head`]
    pub fn head_optional(&mut self) -> Option<&C::Element> {
        self.head().ok()
    }
}

impl<C: Cursor> Cursor for Buffered<C> {
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        self.slot.is_some() || self.cursor.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        match self.slot.take() {
            Some(element) => Ok(element),
            None => self
                .cursor
                .try_next()
                .map_err(|_| IterCombError::exhausted("buffered")),
        }
    }
}

/// Convenience function to create a Buffered cursor
pub fn buffered<C: Cursor>(cursor: C) -> Buffered<C> {
    Buffered::new(cursor)
}

/// Extension trait to add .buffered() method support for cursors
pub trait BufferedExt: Cursor + Sized {
    fn buffered(self) -> Buffered<Self> {
        Buffered::new(self)
    }
}

impl<C> BufferedExt for C where C: Cursor {}
