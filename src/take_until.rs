use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use crate::take_while::Probe;

/// Cursor combinator yielding elements until a predicate first holds
///
/// The element that satisfies the predicate ends the cursor and is not
/// yielded.
pub struct TakeUntil<C: Cursor, P> {
    cursor: C,
    predicate: P,
    probe: Probe<C::Element>,
}

impl<C: Cursor, P> TakeUntil<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            probe: Probe::Unprobed,
        }
    }
}

impl<C, P> Cursor for TakeUntil<C, P>
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
                        tracing::trace!("take_until predicate satisfied");
                        Probe::Stopped
                    } else {
                        Probe::Ready(element)
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
            .ok_or_else(|| IterCombError::exhausted("take_until"))
    }
}

/// Convenience function to create a TakeUntil cursor
pub fn take_until<C, P>(cursor: C, predicate: P) -> TakeUntil<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    TakeUntil::new(cursor, predicate)
}

/// Extension trait to add .take_until() method support for cursors
pub trait TakeUntilExt: Cursor + Sized {
    fn take_until<P>(self, predicate: P) -> TakeUntil<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        TakeUntil::new(self, predicate)
    }
}

impl<C> TakeUntilExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::from;
    use crate::terminal::TerminalExt;

    #[test]
    fn test_take_until_char_quote() {
        let input = r#"hello world"more"#;
        let cursor = from(input.chars()).take_until(|c| *c == '"');

        let result: String = cursor.to_list().into_iter().collect();
        assert_eq!(result, "hello world");
    }

    #[test]
    fn test_take_until_part_of_elements() {
        let mut cursor = take_until(from(vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]), |x| *x > 3);

        assert_eq!(cursor.try_next().unwrap(), 1);
        assert_eq!(cursor.try_next().unwrap(), 2);
        assert_eq!(cursor.try_next().unwrap(), 3);
        assert!(!cursor.has_next());
        assert!(cursor.eos());
    }

    #[test]
    fn test_take_until_first_element_matches() {
        let mut cursor = from(vec![7, 2, 3]).take_until(|x| *x > 3);

        assert!(!cursor.has_next());
        assert_eq!(
            cursor.try_next().unwrap_err(),
            IterCombError::Exhausted { cursor: "take_until" }
        );
    }

    #[test]
    fn test_take_until_not_found() {
        let cursor = from("hello world".chars()).take_until(|c| *c == 'x');

        assert_eq!(cursor.length(), 11);
    }

    #[test]
    fn test_take_until_consumes_only_the_trigger() {
        let mut source = from(b"ab\ncd".iter().copied());
        let line = (&mut source).take_until(|b| *b == b'\n').to_list();

        assert_eq!(line, b"ab".to_vec());
        // the newline itself was pulled to test it
        assert_eq!(source.try_next().unwrap(), b'c');
    }
}
