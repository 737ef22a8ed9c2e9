use crate::error::Result;

/// Single-pass, pull-based cursor over a sequence of elements
///
/// A cursor answers "is there a next element" and produces it on demand.
/// Every combinator in this crate wraps one or more cursors and is itself a
/// cursor, so pipelines are built by ownership transfer: the wrapping cursor
/// becomes the only party allowed to advance the cursor it wraps.
///
/// Implementations must keep `has_next` idempotent. Calling it any number of
/// times without an intervening `try_next` returns the same answer and never
/// skips or duplicates elements.
pub trait Cursor {
    /// The type of elements this cursor produces
    type Element;

    /// Check whether another element is available
    ///
    /// Some cursors have to pull from their source to answer; such pulls are
    /// cached so that the following `try_next` returns the pulled element.
    fn has_next(&mut self) -> bool;

    /// Produce the next element and advance past it
    ///
    /// Returns `IterCombError::Exhausted` if `has_next` is false.
    fn try_next(&mut self) -> Result<Self::Element>;

    /// Check if the cursor is at the end of the sequence
    fn eos(&mut self) -> bool {
        !self.has_next()
    }

    /// Produce the next element if there is one
    fn next_optional(&mut self) -> Option<Self::Element> {
        if self.has_next() {
            self.try_next().ok()
        } else {
            None
        }
    }

    /// Adapt this cursor into a standard library iterator
    fn into_std_iter(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter { cursor: self }
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        (**self).try_next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        (**self).try_next()
    }
}

/// `Iterator` view of a cursor, see [`Cursor::into_std_iter`]
#[derive(Debug, Clone)]
pub struct StdIter<C> {
    cursor: C,
}

impl<C> StdIter<C> {
    /// Recover the wrapped cursor
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for StdIter<C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_optional()
    }
}
