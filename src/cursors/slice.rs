use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor over a borrowed slice, yielding references to its elements
#[derive(Debug)]
pub enum SliceCursor<'data, T> {
    Valid {
        data: &'data [T],
        /// Index of the next element to produce
        position: usize,
    },
    EndOfSlice {
        data: &'data [T],
    },
}

// Manual impls: the cursor only holds a shared slice, so T needs no bounds.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'data, T> SliceCursor<'data, T> {
    pub fn new(data: &'data [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::EndOfSlice { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// Index of the next element, or the slice length once exhausted
    pub fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::EndOfSlice { data } => data.len(),
        }
    }

    /// The whole underlying slice
    pub fn source(&self) -> &'data [T] {
        match self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::EndOfSlice { data } => data,
        }
    }

    /// Elements not produced yet
    pub fn remaining(&self) -> &'data [T] {
        &self.source()[self.position()..]
    }
}

impl<'data, T> Cursor for SliceCursor<'data, T> {
    type Element = &'data T;

    fn has_next(&mut self) -> bool {
        matches!(self, SliceCursor::Valid { .. })
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        match *self {
            SliceCursor::Valid { data, position } => {
                *self = if position + 1 >= data.len() {
                    SliceCursor::EndOfSlice { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                };
                Ok(&data[position])
            }
            SliceCursor::EndOfSlice { .. } => Err(IterCombError::exhausted("slice")),
        }
    }
}
