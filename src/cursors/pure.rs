use crate::cursor::Cursor;
use crate::error::{IterCombError, Result};

/// Cursor yielding exactly one element
#[derive(Debug, Clone)]
pub struct Pure<T> {
    element: Option<T>,
}

impl<T> Pure<T> {
    pub fn new(element: T) -> Self {
        Pure {
            element: Some(element),
        }
    }
}

impl<T> Cursor for Pure<T> {
    type Element = T;

    fn has_next(&mut self) -> bool {
        self.element.is_some()
    }

    fn try_next(&mut self) -> Result<Self::Element> {
        self.element
            .take()
            .ok_or_else(|| IterCombError::exhausted("pure"))
    }
}

/// Convenience function to create a single-element cursor
pub fn pure<T>(element: T) -> Pure<T> {
    Pure::new(element)
}
