use itercomb::cursors::{from, pure};
use itercomb::prelude::*;
use itercomb::{IterCombError, chain};
use test_case::test_case;
use tracing_subscriber::EnvFilter;

// RUST_LOG=itercomb=trace shows combinator state transitions
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn filter_drained_by_next() {
    init_logging();
    let mut evens = from(1..=8).filter(|x| x % 2 == 0);

    for expected in [2, 4, 6, 8] {
        assert!(evens.has_next());
        assert_eq!(evens.try_next().unwrap(), expected);
    }
    assert!(!evens.has_next());
    assert_eq!(
        evens.try_next().unwrap_err(),
        IterCombError::Exhausted { cursor: "filter" }
    );
}

#[test_case(3, vec![1, 2, 3] ; "bound inside the sequence")]
#[test_case(0, vec![] ; "bound below every element")]
#[test_case(9, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5] ; "bound above every element")]
fn take_while_stops_at_first_failure(bound: i32, expected: Vec<i32>) {
    init_logging();
    let source = vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5];

    assert_eq!(from(source).take_while(|x| *x <= bound).to_list(), expected);
}

#[test_case(3, vec![4, 5, 1, 2, 3, 4, 5] ; "bound inside the sequence")]
#[test_case(0, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5] ; "bound below every element")]
#[test_case(9, vec![] ; "bound above every element")]
fn skip_while_keeps_everything_after_first_failure(bound: i32, expected: Vec<i32>) {
    init_logging();
    let source = vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5];

    assert_eq!(from(source).skip_while(|x| *x <= bound).to_list(), expected);
}

#[test]
fn distinct_keeps_first_occurrences() {
    init_logging();
    let source = vec![1, 2, 1, 2, 1, 3, 3, 4, 4, 4, 2, 3, 4, 1, 3, 4, 2];

    assert_eq!(from(source).distinct().to_list(), vec![1, 2, 3, 4]);
}

#[test]
fn flat_map_repeats_each_element() {
    init_logging();
    let repeated = from(vec![1, 2, 3])
        .flat_map(|x| from(vec![x, x, x]))
        .to_list();

    assert_eq!(repeated, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
}

#[test]
fn buffered_head_does_not_consume() {
    init_logging();
    let mut cursor = from(vec![1, 2, 3, 4]).buffered();

    assert_eq!(*cursor.head().unwrap(), 1);
    assert_eq!(*cursor.head().unwrap(), 1);
    assert_eq!(cursor.try_next().unwrap(), 1);
    assert_eq!(*cursor.head().unwrap(), 2);
}

#[test_case(vec![], "Cursor(0,8)" ; "empty middle")]
#[test_case(vec![7], "Cursor(0,7,8)" ; "single element")]
#[test_case(vec![1, 2], "Cursor(0,1,2,8)" ; "two elements")]
fn concatenation_keeps_order(middle: Vec<i32>, expected: &str) {
    init_logging();
    let rendered = chain(pure(0), from(middle)).append(8).mk_string_default();

    assert_eq!(rendered, expected);
}

#[test]
fn pipeline_over_infinite_source_is_lazy() {
    init_logging();
    let squares = itercomb::iterate(1u64, |x| x + 1)
        .map(|x| x * x)
        .skip_until(|x| *x > 50)
        .take_until(|x| *x > 120)
        .zip_with_index()
        .mk_string("", " ", "");

    assert_eq!(squares, "(64, 0) (81, 1) (100, 2)");
}
