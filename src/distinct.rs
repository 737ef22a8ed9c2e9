use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use std::collections::HashSet;
use std::hash::Hash;

/// Cursor combinator that yields each distinct element the first time it is seen
///
/// Remembers every element produced so far but reads the source only as far as
/// the consumer asks, so it works on infinite sources.
pub struct Distinct<C: Cursor> {
    cursor: C,
    seen: HashSet<C::Element>,
    pending: Option<C::Element>,
}

impl<C: Cursor> Distinct<C> {
    pub fn new(cursor: C) -> Self {
        Distinct {
            cursor,
            seen: HashSet::new(),
            pending: None,
        }
    }
}

impl<C> Cursor for Distinct<C>
where
    C: Cursor,
    C::Element: Eq + Hash + Clone,
{
    type Element = C::Element;

    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }

        while let Some(element) = self.cursor.next_optional() {
            if self.seen.contains(&element) {
                tracing::trace!("distinct dropping duplicate");
                continue;
            }
            self.seen.insert(element.clone());
            self.pending = Some(element);
            return true;
        }
        false
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        self.has_next();
        self.pending
            .take()
            .ok_or_else(|| IterCombError::exhausted("distinct"))
    }
}

/// Convenience function to create a Distinct cursor
pub fn distinct<C>(cursor: C) -> Distinct<C>
where
    C: Cursor,
    C::Element: Eq + Hash + Clone,
{
    Distinct::new(cursor)
}

/// Extension trait to add .distinct() method support for cursors
pub trait DistinctExt: Cursor + Sized {
    fn distinct(self) -> Distinct<Self>
    where
        Self::Element: Eq + Hash + Clone,
    {
        Distinct::new(self)
    }
}

impl<C> DistinctExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{from, iterate};
    use crate::map::MapExt;
    use crate::take::TakeExt;
    use crate::terminal::TerminalExt;

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let mut cursor = from(vec![1, 2, 1, 2, 1, 3, 3, 4, 4, 4, 2, 3, 4, 1, 3, 4, 2]).distinct();

        assert_eq!(cursor.try_next().unwrap(), 1);
        assert_eq!(cursor.try_next().unwrap(), 2);
        assert_eq!(cursor.try_next().unwrap(), 3);
        assert_eq!(cursor.try_next().unwrap(), 4);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_distinct_preserves_order() {
        let cursor = distinct(from(vec!["b", "a", "b", "c", "a"]));

        assert_eq!(cursor.to_list(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_distinct_on_infinite_source() {
        // 0, 1, 2, 0, 1, 2, ... has only three distinct values, so ask for exactly three
        let cursor = iterate(0u32, |x| x + 1).map(|x| x % 3).distinct().take(3);

        assert_eq!(cursor.to_list(), vec![0, 1, 2]);
    }

    #[test]
    fn test_distinct_empty_and_idempotent() {
        let mut cursor = from(vec![7, 7, 7]).distinct();

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.try_next().unwrap(), 7);
        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert_eq!(
            cursor.try_next().unwrap_err(),
            IterCombError::Exhausted { cursor: "distinct" }
        );
    }
}
