use crate::cursor::Cursor;
use crate::cursors::{Pure, pure};
use crate::error::{IterCombError, Result};

/// Cursor combinator that yields everything from `first`, then everything from `second`
///
/// Backs `append`, `append_all`, `prepend` and `prepend_all`. Once `first`
/// reports exhaustion it is never polled again.
pub struct Chain<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chain {
            first,
            second,
            first_done: false,
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Element = A::Element>,
{
    type Element = A::Element;

    fn has_next(&mut self) -> bool {
        if !self.first_done {
            if self.first.has_next() {
                return true;
            }
            tracing::trace!("chain moving to second cursor");
            self.first_done = true;
        }
        self.second.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if !self.has_next() {
            return Err(IterCombError::exhausted("chain"));
        }
        let next = if self.first_done {
            self.second.try_next()
        } else {
            self.first.try_next()
        };
        next.map_err(|_| IterCombError::exhausted("chain"))
    }
}

/// Convenience function to concatenate two cursors
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Cursor,
    B: Cursor<Element = A::Element>,
{
    Chain::new(first, second)
}

/// Extension trait adding the append and prepend family to all cursors
pub trait ConcatExt: Cursor + Sized {
    /// Yield `element` after every element of this cursor
    fn append(self, element: Self::Element) -> Chain<Self, Pure<Self::Element>> {
        Chain::new(self, pure(element))
    }

    /// Yield the elements of `other` after every element of this cursor
    fn append_all<O>(self, other: O) -> Chain<Self, O>
    where
        O: Cursor<Element = Self::Element>,
    {
        Chain::new(self, other)
    }

    /// Yield `element` before every element of this cursor
    fn prepend(self, element: Self::Element) -> Chain<Pure<Self::Element>, Self> {
        Chain::new(pure(element), self)
    }

    /// Yield the elements of `other` before every element of this cursor
    fn prepend_all<O>(self, other: O) -> Chain<O, Self>
    where
        O: Cursor<Element = Self::Element>,
    {
        Chain::new(other, self)
    }
}

impl<C> ConcatExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{empty, from, iterate};
    use crate::take::TakeExt;
    use crate::terminal::TerminalExt;

    #[test]
    fn test_append() {
        let cursor = from(vec![1, 2, 3, 4]).append(5);

        assert_eq!(cursor.to_list(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_to_empty() {
        let mut cursor = empty::<i32>().append(9);

        assert!(cursor.has_next());
        assert_eq!(cursor.try_next().unwrap(), 9);
        assert!(!cursor.has_next());
        assert!(cursor.try_next().is_err());
    }

    #[test]
    fn test_append_all() {
        let cursor = from(vec![1, 2, 3, 4]).append_all(from(vec![5, 6, 7, 8]));

        assert_eq!(cursor.to_list(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_prepend() {
        let cursor = from(vec![1, 2, 3, 4]).prepend(0);

        assert_eq!(cursor.to_list(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_prepend_all() {
        let cursor = from(vec![4, 5, 6, 7]).prepend_all(from(vec![1, 2, 3]));

        assert_eq!(cursor.to_list(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_prepend_to_infinite() {
        let cursor = iterate(1, |x| x + 1).prepend(0).take(4);

        assert_eq!(cursor.to_list(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_chain_both_empty() {
        let mut cursor = chain(empty::<u8>(), empty::<u8>());

        assert!(!cursor.has_next());
        assert_eq!(
            cursor.try_next().unwrap_err(),
            IterCombError::Exhausted { cursor: "chain" }
        );
    }

    #[test]
    fn test_chain_has_next_idempotent_at_boundary() {
        let mut cursor = from(vec!['a']).append('b');

        assert_eq!(cursor.try_next().unwrap(), 'a');
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.try_next().unwrap(), 'b');
        assert!(!cursor.has_next());
    }
}
