use crate::cursor::Cursor;
use crate::error::Result;

/// Infinite cursor `first, progress(first), progress(progress(first)), ...`
///
/// `progress` runs once per produced element after the first, and only when
/// that element is requested.
pub struct Iterate<T, F> {
    current: T,
    started: bool,
    progress: F,
}

impl<T, F> Iterate<T, F> {
    pub fn new(first: T, progress: F) -> Self {
        Iterate {
            current: first,
            started: false,
            progress,
        }
    }
}

impl<T, F> Cursor for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Element = T;

    fn has_next(&mut self) -> bool {
        true
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        if self.started {
            self.current = (self.progress)(&self.current);
        } else {
            self.started = true;
        }
        Ok(self.current.clone())
    }
}

/// Convenience function to create an Iterate cursor
pub fn iterate<T, F>(first: T, progress: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate::new(first, progress)
}
