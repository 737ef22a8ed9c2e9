use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor combinator discarding leading elements while a predicate holds
///
/// The predicate runs once for every discarded element and once for the first
/// retained one. Everything after the retention point passes through untested.
pub struct SkipWhile<C: Cursor, P> {
    cursor: C,
    predicate: P,
    skipping: bool,
    pending: Option<C::Element>,
}

impl<C: Cursor, P> SkipWhile<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        SkipWhile {
            cursor,
            predicate,
            skipping: true,
            pending: None,
        }
    }
}

impl<C, P> Cursor for SkipWhile<C, P>
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
            if !(self.predicate)(&element) {
                tracing::trace!("skip_while reached retention point");
                self.skipping = false;
                self.pending = Some(element);
                return true;
            }
        }
        false
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.has_next() {
            return Err(IterCombError::exhausted("skip_while"));
        }
        match self.pending.take() {
            Some(element) => Ok(element),
            None => self
                .cursor
                .try_next()
                .map_err(|_| IterCombError::exhausted("skip_while")),
        }
    }
}

/// Convenience function to create a SkipWhile cursor
pub fn skip_while<C, P>(cursor: C, predicate: P) -> SkipWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    SkipWhile::new(cursor, predicate)
}

/// Extension trait to add .skip_while() method support for cursors
pub trait SkipWhileExt: Cursor + Sized {
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        SkipWhile::new(self, predicate)
    }
}

impl<C> SkipWhileExt for C where C: Cursor {}
