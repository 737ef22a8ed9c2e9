//! # IterComb - Lazy Cursor Combinators
//!
//! A single-pass, pull-based cursor abstraction with a full vocabulary of
//! lazy transformations and eager terminal operations.
//!
//! Every combinator wraps one or more cursors and is itself a cursor, so
//! pipelines read left to right and nothing runs until a terminal operation
//! or an explicit `try_next` pulls an element through. The library emphasizes:
//!
//! - **Zero panics**: Protocol violations surface as `IterCombError` values
//! - **Laziness**: Infinite sources compose safely with truncating combinators
//! - **Composability**: One small state machine per combinator
//!
//! ```
//! use itercomb::prelude::*;
//! use itercomb::cursors::iterate;
//!
//! let evens = iterate(0, |x| x + 1)
//!     .filter(|x| x % 2 == 0)
//!     .take(4)
//!     .mk_string("[", ", ", "]");
//! assert_eq!(evens, "[0, 2, 4, 6]");
//! ```

pub mod buffered;
pub mod chain;
pub mod cursor;
pub mod cursors;
pub mod distinct;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod map;
pub mod pair;
pub mod recipes;
pub mod scan_left;
pub mod skip;
pub mod skip_until;
pub mod skip_while;
pub mod take;
pub mod take_until;
pub mod take_while;
pub mod tap_each;
pub mod terminal;
pub mod zip;
pub mod zip_with_index;

pub use buffered::{Buffered, BufferedExt, buffered};
pub use chain::{Chain, ConcatExt, chain};
pub use cursor::{Cursor, StdIter};
pub use cursors::{Empty, FromIter, Iterate, Pure, SliceCursor, empty, from, iterate, pure};
pub use distinct::{Distinct, DistinctExt, distinct};
pub use error::{IterCombError, Result};
pub use filter::{Filter, FilterExt, filter};
pub use flat_map::{FlatMap, FlatMapExt, flat_map};
pub use map::{Map, MapExt, map};
pub use pair::Pair;
pub use scan_left::{ScanLeft, ScanLeftExt, scan_left};
pub use skip::{Skip, SkipExt, skip};
pub use skip_until::{SkipUntil, SkipUntilExt, skip_until};
pub use skip_while::{SkipWhile, SkipWhileExt, skip_while};
pub use take::{Take, TakeExt, take};
pub use take_until::{TakeUntil, TakeUntilExt, take_until};
pub use take_while::{TakeWhile, TakeWhileExt, take_while};
pub use tap_each::{TapEach, TapEachExt, tap_each};
pub use terminal::TerminalExt;
pub use zip::{Zip, ZipExt, zip};
pub use zip_with_index::{ZipWithIndex, ZipWithIndexExt, zip_with_index};

/// The cursor trait together with every extension trait
pub mod prelude {
    pub use crate::buffered::BufferedExt;
    pub use crate::chain::ConcatExt;
    pub use crate::cursor::Cursor;
    pub use crate::distinct::DistinctExt;
    pub use crate::filter::FilterExt;
    pub use crate::flat_map::FlatMapExt;
    pub use crate::map::MapExt;
    pub use crate::scan_left::ScanLeftExt;
    pub use crate::skip::SkipExt;
    pub use crate::skip_until::SkipUntilExt;
    pub use crate::skip_while::SkipWhileExt;
    pub use crate::take::TakeExt;
    pub use crate::take_until::TakeUntilExt;
    pub use crate::take_while::TakeWhileExt;
    pub use crate::tap_each::TapEachExt;
    pub use crate::terminal::TerminalExt;
    pub use crate::zip::ZipExt;
    pub use crate::zip_with_index::ZipWithIndexExt;
}
