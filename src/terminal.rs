//! Eager operations that drain a cursor into a concrete value

use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};
use crate::pair::Pair;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// Extension trait adding terminal operations to all cursors
///
/// Operations taking `self` drain the cursor completely. `find`, `contains`
/// and `index_of` borrow it and stop right after the first match, leaving the
/// rest available.
pub trait TerminalExt: Cursor + Sized {
    /// Count the remaining elements
    fn length(mut self) -> usize {
        let mut count = 0;
        while self.next_optional().is_some() {
            count += 1;
        }
        count
    }

    /// Last element, or `IterCombError::Empty`
    fn last(self) -> Result<Self::Element> {
        self.last_optional()
            .ok_or_else(|| IterCombError::empty("last"))
    }

    fn last_optional(mut self) -> Option<Self::Element> {
        let mut last = None;
        while let Some(element) = self.next_optional() {
            last = Some(element);
        }
        last
    }

    /// Zero-based position of the first element equal to `element`
    fn index_of(&mut self, element: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        let mut index = 0;
        while let Some(candidate) = self.next_optional() {
            if candidate == *element {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// First element satisfying the predicate
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        while let Some(element) = self.next_optional() {
            if predicate(&element) {
                return Some(element);
            }
        }
        None
    }

    fn contains(&mut self, element: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.index_of(element).is_some()
    }

    fn for_each<F>(mut self, mut action: F)
    where
        F: FnMut(Self::Element),
    {
        while let Some(element) = self.next_optional() {
            action(element);
        }
    }

    /// Drain into a collection created by `factory`
    fn to_collection<D, F>(self, factory: F) -> D
    where
        D: Extend<Self::Element>,
        F: FnOnce() -> D,
    {
        let mut collection = factory();
        collection.extend(self.into_std_iter());
        collection
    }

    fn to_list(self) -> Vec<Self::Element> {
        self.to_collection(Vec::new)
    }

    fn to_set(self) -> HashSet<Self::Element>
    where
        Self::Element: Eq + Hash,
    {
        self.to_collection(HashSet::new)
    }

    /// Drain into a map; later keys overwrite earlier ones
    fn to_map<K, V, F>(mut self, mut as_pair: F) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(Self::Element) -> Pair<K, V>,
    {
        let mut map = HashMap::new();
        while let Some(element) = self.next_optional() {
            let (key, value) = as_pair(element).into_tuple();
            map.insert(key, value);
        }
        map
    }

    /// True if both cursors yield equal elements in order and end together
    fn same_elements<O>(mut self, mut other: O) -> bool
    where
        O: Cursor<Element = Self::Element>,
        Self::Element: PartialEq,
    {
        while self.has_next() && other.has_next() {
            match (self.next_optional(), other.next_optional()) {
                (Some(left), Some(right)) if left == right => {}
                _ => return false,
            }
        }
        !self.has_next() && !other.has_next()
    }

    /// Left-associative reduction, or `IterCombError::Empty`
    fn reduce<F>(self, folder: F) -> Result<Self::Element>
    where
        F: FnMut(Self::Element, Self::Element) -> Self::Element,
    {
        self.reduce_optional(folder)
            .ok_or_else(|| IterCombError::empty("reduce"))
    }

    fn reduce_optional<F>(mut self, folder: F) -> Option<Self::Element>
    where
        F: FnMut(Self::Element, Self::Element) -> Self::Element,
    {
        let first = self.next_optional()?;
        Some(self.fold_left(first, folder))
    }

    fn fold_left<B, F>(mut self, zero: B, mut folder: F) -> B
    where
        F: FnMut(B, Self::Element) -> B,
    {
        let mut accumulator = zero;
        while let Some(element) = self.next_optional() {
            accumulator = folder(accumulator, element);
        }
        accumulator
    }

    /// Smallest element by `compare`; the first of equal minima wins
    fn min_by<F>(self, compare: F) -> Result<Self::Element>
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        extreme_by(self, compare, Ordering::Less)
            .ok_or_else(|| IterCombError::empty("min"))
    }

    /// Largest element by `compare`; the first of equal maxima wins
    fn max_by<F>(self, compare: F) -> Result<Self::Element>
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        extreme_by(self, compare, Ordering::Greater)
            .ok_or_else(|| IterCombError::empty("max"))
    }

    fn min(self) -> Result<Self::Element>
    where
        Self::Element: Ord,
    {
        self.min_by(|left, right| left.cmp(right))
    }

    fn max(self) -> Result<Self::Element>
    where
        Self::Element: Ord,
    {
        self.max_by(|left, right| left.cmp(right))
    }

    /// Render as `prefix`, the elements joined by `separator`, then `suffix`
    fn mk_string(mut self, prefix: &str, separator: &str, suffix: &str) -> String
    where
        Self::Element: Display,
    {
        let mut result = String::from(prefix);
        let mut first = true;
        while let Some(element) = self.next_optional() {
            if !first {
                result.push_str(separator);
            }
            first = false;
            result.push_str(&element.to_string());
        }
        result.push_str(suffix);
        result
    }

    /// `Cursor(a,b,c)`
    fn mk_string_default(self) -> String
    where
        Self::Element: Display,
    {
        self.mk_string("Cursor(", ",", ")")
    }
}

impl<C> TerminalExt for C where C: Cursor {}

fn extreme_by<C, F>(mut cursor: C, mut compare: F, wanted: Ordering) -> Option<C::Element>
where
    C: Cursor,
    F: FnMut(&C::Element, &C::Element) -> Ordering,
{
    let mut best = cursor.next_optional()?;
    while let Some(candidate) = cursor.next_optional() {
        if compare(&candidate, &best) == wanted {
            best = candidate;
        }
    }
    Some(best)
}
