//! Error types for the table text codec.

use thiserror::Error;

/// Structured error types for reading and writing table text.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The text is not a valid table literal
    #[error("Could not deserialize table at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    /// A float that has no literal form
    #[error("Could not serialize table: non-finite number at {path}")]
    NonFiniteNumber { path: String },

    /// JSON text that does not hold a table, or a table JSON cannot encode
    #[error("Could not convert table to or from JSON: {reason}")]
    Json { reason: String },
}

impl TableError {
    /// Check if this error came from reading text
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, TableError::Syntax { .. })
    }

    /// Check if this error came from writing text
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, TableError::NonFiniteNumber { .. })
    }

    /// Check if this error came from the JSON encoding
    pub fn is_json_error(&self) -> bool {
        matches!(self, TableError::Json { .. })
    }

    /// Byte offset of a syntax error
    pub fn position(&self) -> Option<usize> {
        match self {
            TableError::Syntax { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl From<TableError> for crate::Error {
    fn from(err: TableError) -> Self {
        crate::Error::Table(err)
    }
}
