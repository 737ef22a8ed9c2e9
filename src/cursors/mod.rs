//! Base cursors and the functions that construct them

pub mod empty;
pub mod from;
pub mod iterate;
pub mod pure;
pub mod slice;

pub use empty::{Empty, empty};
pub use from::{FromIter, from};
pub use iterate::{Iterate, iterate};
pub use pure::{Pure, pure};
pub use slice::SliceCursor;

/// Build a cursor over the given elements, in order
///
/// ```
/// use itercomb::{cursor, Cursor};
///
/// let mut c = cursor![1, 2, 3];
/// assert_eq!(c.try_next().unwrap(), 1);
/// ```
#[macro_export]
macro_rules! cursor {
    () => {
        $crate::cursors::from(::std::vec::Vec::new())
    };
    ( $( $element:expr ),+ $(,)? ) => {
        $crate::cursors::from(::std::vec![ $( $element ),+ ])
    };
}
