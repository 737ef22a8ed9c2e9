use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use std::fmt;
use std::marker::PhantomData;

/// Cursor that is always exhausted
///
/// Holds no state, so a single value can be shared by every consumer.
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// The shared always-exhausted cursor
    pub const INSTANCE: Self = Empty {
        _phantom: PhantomData,
    };
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Cursor for Empty<T> {
    type Element = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        Err(IterCombError::exhausted("empty"))
    }
}

/// Convenience function returning the shared empty cursor
pub const fn empty<T>() -> Empty<T> {
    Empty::INSTANCE
}
