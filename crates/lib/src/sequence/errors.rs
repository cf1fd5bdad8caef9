//! Error types for 1-based sequence access.

use thiserror::Error;

/// Structured error types for [`IndexedSequence`](super::IndexedSequence) operations.
///
/// Every failure carries the offending 1-based index so callers can surface
/// it verbatim.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The index is outside the permitted range (index 0 always is)
    #[error("IndexedSequence does not have index {index}.")]
    IndexOutOfRange { index: usize },

    /// An element operation was attempted on the end (append) position
    #[error("IndexedSequence cannot operate on its end position {index}.")]
    EndPosition { index: usize },
}

impl SequenceError {
    /// Check if this error is an out-of-range access
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SequenceError::IndexOutOfRange { .. })
    }

    /// Check if this error came from operating on the end position
    pub fn is_end_position(&self) -> bool {
        matches!(self, SequenceError::EndPosition { .. })
    }

    /// The 1-based index that caused the failure
    pub fn index(&self) -> usize {
        match self {
            SequenceError::IndexOutOfRange { index } | SequenceError::EndPosition { index } => {
                *index
            }
        }
    }
}

impl From<SequenceError> for crate::Error {
    fn from(err: SequenceError) -> Self {
        crate::Error::Sequence(err)
    }
}
