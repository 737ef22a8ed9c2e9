use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator that keeps only the elements satisfying a predicate
///
/// `has_next` pulls from the source until it finds a qualifying element and
/// holds it, so the predicate runs exactly once per source element.
pub struct Filter<C: Cursor, P> {
    cursor: C,
    predicate: P,
    pending: Option<C::Element>,
    exhausted: bool,
}

impl<C: Cursor, P> Filter<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            pending: None,
            exhausted: false,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        if self.exhausted {
            return false;
        }

        while let Some(element) = self.cursor.next_optional() {
            if (self.predicate)(&element) {
                self.pending = Some(element);
                return true;
            }
        }

        tracing::trace!("filter source exhausted");
        self.exhausted = true;
        false
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        self.has_next();
        self.pending
            .take()
            .ok_or_else(|| IterCombError::exhausted("filter"))
    }
}

/// Extension trait to add filter method to all cursors
pub trait FilterExt: Cursor {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Element) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<C: Cursor> FilterExt for C {}

/// Convenience function to create a filtered cursor
pub fn filter<C, P>(cursor: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    Filter::new(cursor, predicate)
}
