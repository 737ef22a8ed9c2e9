use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// One-element look-ahead state shared by `take_while` and `take_until`
pub(crate) enum Probe<T> {
    /// Nothing pulled since the last `try_next`
    Unprobed,
    /// Pulled and accepted, waiting for `try_next`
    Ready(T),
    /// The predicate tripped or the source ran out; permanent
    Stopped,
}

impl<T> Probe<T> {
    pub(crate) fn is_ready(&self) -> bool {
        matches!(self, Probe::Ready(_))
    }

    pub(crate) fn take_ready(&mut self) -> Option<T> {
        match std::mem::replace(self, Probe::Unprobed) {
            Probe::Ready(element) => Some(element),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// Cursor combinator yielding elements while a predicate holds
///
/// The first element failing the predicate ends the cursor and is not
/// yielded. The predicate runs exactly once per pulled element.
pub struct TakeWhile<C: Cursor, P> {
    cursor: C,
    predicate: P,
    probe: Probe<C::Element>,
}

impl<C: Cursor, P> TakeWhile<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        TakeWhile {
            cursor,
            predicate,
            probe: Probe::Unprobed,
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        if let Probe::Unprobed = self.probe {
            self.probe = match self.cursor.next_optional() {
                Some(element) => {
                    if (self.predicate)(&element) {
                        Probe::Ready(element)
                    } else {
                        tracing::trace!("take_while predicate failed");
                        Probe::Stopped
                    }
                }
                None => Probe::Stopped,
            };
        }
        self.probe.is_ready()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        self.has_next();
        self.probe
            .take_ready()
            .ok_or_else(|| IterCombError::exhausted("take_while"))
    }
}

/// Convenience function to create a TakeWhile cursor
pub fn take_while<C, P>(cursor: C, predicate: P) -> TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    TakeWhile::new(cursor, predicate)
}

/// Extension trait to add .take_while() method support for cursors
pub trait TakeWhileExt: Cursor + Sized {
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        TakeWhile::new(self, predicate)
    }
}

impl<C> TakeWhileExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{from, iterate};
    use crate::terminal::TerminalExt;
    use std::cell::Cell;

    #[test]
    fn test_take_while_part_of_elements() {
        let mut cursor = from(vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]).take_while(|x| *x <= 3);

        assert!(!cursor.eos());
        assert!(cursor.has_next());
        assert_eq!(cursor.try_next().unwrap(), 1);
        assert_eq!(cursor.try_next().unwrap(), 2);
        assert_eq!(cursor.try_next().unwrap(), 3);
        assert!(!cursor.has_next());
        assert!(cursor.eos());
    }

    #[test]
    fn test_take_while_first_element_fails() {
        let mut cursor = take_while(from(vec![7, 2, 3]), |x| *x <= 3);

        assert!(!cursor.has_next());
        assert!(cursor.try_next().is_err());
    }

    #[test]
    fn test_take_while_every_element_passes() {
        let cursor = from(vec![1, 2, 3, 4, 5]).take_while(|x| *x > 0);

        assert_eq!(cursor.to_list(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_take_while_predicate_called_once_per_probe() {
        let calls = Cell::new(0);
        let mut cursor = from(vec![1, 2, 9, 1]).take_while(|x| {
            calls.set(calls.get() + 1);
            *x < 5
        });

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(calls.get(), 1);
        assert_eq!(cursor.try_next().unwrap(), 1);
        assert_eq!(cursor.try_next().unwrap(), 2);
        assert_eq!(calls.get(), 2);

        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_take_while_on_infinite_source() {
        let cursor = iterate(1u64, |x| x * 3).take_while(|x| *x < 100);

        assert_eq!(cursor.to_list(), vec![1, 3, 9, 27, 81]);
    }
}
