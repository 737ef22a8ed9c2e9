use thiserror::Error;

/// Errors raised by cursors and terminal operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterCombError {
    /// `try_next` was called on a cursor whose `has_next` is false
    #[error("next() called on exhausted {cursor} cursor")]
    Exhausted {
        /// Kind of cursor that was polled
        cursor: &'static str,
    },
    /// A terminal operation that needs at least one element ran on an empty cursor
    #[error("{operation}() is undefined on an empty cursor")]
    Empty {
        /// Name of the operation that failed
        operation: &'static str,
    },
}

impl IterCombError {
    pub fn exhausted(cursor: &'static str) -> Self {
        tracing::debug!(cursor, "next() on exhausted cursor");
        IterCombError::Exhausted { cursor }
    }

    pub fn empty(operation: &'static str) -> Self {
        tracing::debug!(operation, "terminal operation on empty cursor");
        IterCombError::Empty { operation }
    }

    /// Returns true for the protocol-level exhaustion error
    pub fn is_exhausted(&self) -> bool {
        matches!(self, IterCombError::Exhausted { .. })
    }
}

pub type Result<T> = std::result::Result<T, IterCombError>;
