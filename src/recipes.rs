//! Small pipelines built only from the public cursor surface

use crate::cursor::Cursor;
use crate::cursors::{from, iterate};
use crate::flat_map::FlatMapExt;
use crate::map::MapExt;
use crate::pair::Pair;
use crate::take::TakeExt;
use crate::terminal::TerminalExt;
use std::borrow::Borrow;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub height: f64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, height: f64) -> Self {
        Person {
            name: name.into(),
            age,
            height,
        }
    }
}

/// Total of the ages, accumulated in `u64` so no population can overflow it
pub fn sum_ages<C>(people: C) -> u64
where
    C: Cursor,
    C::Element: Borrow<Person>,
{
    people.fold_left(0u64, |total, person| total + u64::from(person.borrow().age))
}

/// Integer mean of the ages, `None` for no people
pub fn avg_age<C>(people: C) -> Option<u32>
where
    C: Cursor,
    C::Element: Borrow<Person>,
{
    let (total, count) = people.fold_left((0u64, 0u64), |(total, count), person| {
        (total + u64::from(person.borrow().age), count + 1)
    });
    // a mean of u32 values always fits back into u32
    (count > 0)
        .then(|| total / count)
        .and_then(|mean| u32::try_from(mean).ok())
}

/// Cartesian product, row-major: every element of `a` paired with all of `b`
///
/// `b` is restarted for each element of `a`, so it must be cloneable and
/// finite for the product to get past the first row.
pub fn product<IA, IB>(a: IA, b: IB) -> impl Cursor<Element = Pair<IA::Item, IB::Item>>
where
    IA: IntoIterator,
    IA::Item: Clone,
    IB: IntoIterator + Clone,
{
    from(a).flat_map(move |left| {
        from(b.clone()).map(move |right| Pair::new(left.clone(), right))
    })
}

/// `1*1, 1*2, ..., 1*10, 2*1, ..., 10*10`
pub fn multiplication_board() -> impl Cursor<Element = u32> {
    from(1..=10u32).flat_map(|row| {
        iterate(1u32, |column| column + 1)
            .take(10)
            .map(move |column| row * column)
    })
}

/// Infinite `0!, 1!, 2!, ...`
///
/// Exact up to `20!`. Later values wrap modulo 2^64, and from `66!` on they
/// are all zero.
pub fn factorial() -> impl Cursor<Element = u64> {
    iterate((0u64, 1u64), |&(n, total)| {
        let next = n.wrapping_add(1);
        (next, total.wrapping_mul(next))
    })
    .map(|(_, total)| total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{empty, SliceCursor};
    use crate::skip::SkipExt;

    fn people() -> Vec<Person> {
        vec![
            Person::new("Ada", 36, 1.65),
            Person::new("Brian", 41, 1.80),
            Person::new("Chen", 30, 1.72),
        ]
    }

    #[test]
    fn test_sum_ages() {
        assert_eq!(sum_ages(from(people())), 107);
        assert_eq!(sum_ages(SliceCursor::new(&people())), 107);
        assert_eq!(sum_ages(empty::<Person>()), 0);
    }

    #[test]
    fn test_avg_age_truncates() {
        assert_eq!(avg_age(from(people())), Some(35));
        assert_eq!(avg_age(empty::<Person>()), None);
    }

    #[test]
    fn test_ages_beyond_u32_total() {
        let elders = vec![
            Person::new("Old", u32::MAX, 1.70),
            Person::new("Older", u32::MAX, 1.60),
            Person::new("Young", 1, 1.10),
        ];

        assert_eq!(sum_ages(SliceCursor::new(&elders)), 2 * u64::from(u32::MAX) + 1);
        assert_eq!(avg_age(SliceCursor::new(&elders[..2])), Some(u32::MAX));
        assert_eq!(avg_age(from(elders)), Some(2_863_311_530));
    }

    #[test]
    fn test_product() {
        let pairs = product(vec![1, 2], vec!['a', 'b', 'c']).to_list();

        assert_eq!(
            pairs,
            vec![
                Pair::new(1, 'a'),
                Pair::new(1, 'b'),
                Pair::new(1, 'c'),
                Pair::new(2, 'a'),
                Pair::new(2, 'b'),
                Pair::new(2, 'c'),
            ]
        );
    }

    #[test]
    fn test_product_with_infinite_left_side() {
        let first = product(0.., vec!["x", "y"]).take(5).mk_string("", " ", "");

        assert_eq!(first, "(0, x) (0, y) (1, x) (1, y) (2, x)");
    }

    #[test]
    fn test_product_with_empty_side() {
        assert_eq!(product(Vec::<i32>::new(), vec![1]).length(), 0);
        assert_eq!(product(vec![1], Vec::<i32>::new()).length(), 0);
    }

    #[test]
    fn test_multiplication_board() {
        let board = multiplication_board().to_list();

        assert_eq!(board.len(), 100);
        assert_eq!(&board[..10], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(board[23], 12); // 3 * 4
        assert_eq!(board[99], 100);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial().take(7).to_list(), vec![1, 1, 2, 6, 24, 120, 720]);
        assert_eq!(factorial().skip(20).next_optional(), Some(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_wraps_past_u64() {
        let values = factorial().take(70).to_list();
        let twenty = 2_432_902_008_176_640_000u64;

        assert_eq!(values.len(), 70);
        assert_eq!(values[20], twenty);
        assert_eq!(values[21], twenty.wrapping_mul(21));
        assert_eq!(values[66], 0);
        assert_eq!(values[69], 0);
    }
}
