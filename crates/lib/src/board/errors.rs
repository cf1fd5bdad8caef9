//! Error types for board mutations.

use thiserror::Error;

/// Structured error types for [`Board`](super::Board) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// An element operation targeted the end (append) position
    #[error("Board: cannot {operation} the end position.")]
    EndPosition { operation: &'static str },

    /// A position or Idx outside the board
    #[error("Board: position {index} is out of range for a board of {len} posts.")]
    InvalidPosition { index: usize, len: usize },
}

impl BoardError {
    /// Check if this error came from operating on the end position
    pub fn is_end_position(&self) -> bool {
        matches!(self, BoardError::EndPosition { .. })
    }

    /// Check if this error is an out-of-range position
    pub fn is_invalid_position(&self) -> bool {
        matches!(self, BoardError::InvalidPosition { .. })
    }
}

impl From<BoardError> for crate::Error {
    fn from(err: BoardError) -> Self {
        crate::Error::Board(err)
    }
}
