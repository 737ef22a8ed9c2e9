use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator discarding leading elements until a predicate first holds
///
/// The element satisfying the predicate is the first one yielded.
pub struct SkipUntil<C: Cursor, P> {
    cursor: C,
    predicate: P,
    skipping: bool,
    pending: Option<C::Element>,
}

impl<C: Cursor, P> SkipUntil<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            skipping: true,
            pending: None,
        }
    }
}

impl<C, P> Cursor for SkipUntil<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        if !self.skipping {
            return self.cursor.has_next();
        }

        while let Some(element) = self.cursor.next_optional() {
            if (self.predicate)(&element) {
                tracing::trace!("skip_until reached retention point");
                self.skipping = false;
                self.pending = Some(element);
                return true;
            }
        }
        false
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.has_next() {
            return Err(IterCombError::exhausted("skip_until"));
        }
        match self.pending.take() {
            Some(element) => Ok(element),
            None => self
                .cursor
                .try_next()
                .map_err(|_| IterCombError::exhausted("skip_until")),
        }
    }
}

/// Convenience function to create a SkipUntil cursor
pub fn skip_until<C, P>(cursor: C, predicate: P) -> SkipUntil<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    SkipUntil::new(cursor, predicate)
}

/// Extension trait to add .skip_until() method support for cursors
pub trait SkipUntilExt: Cursor + Sized {
    fn skip_until<P>(self, predicate: P) -> SkipUntil<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        SkipUntil::new(self, predicate)
    }
}

impl<C> SkipUntilExt for C where C: Cursor {}
