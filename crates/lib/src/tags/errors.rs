//! Error types for tag values and tag maps.

use thiserror::Error;

/// Structured error types for [`TagValue`](super::TagValue) construction and
/// [`Tags`](super::Tags) access.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// A forced type hint outside of 0..=3 was supplied
    #[error("A Tag cannot be initialized with index {hint}.")]
    InvalidHint { hint: usize },

    /// Text could not be coerced into the hinted type
    #[error("Could not parse string into {expected} Tag.")]
    Coercion { expected: &'static str, text: String },

    /// A typed accessor was used against a different stored type
    #[error("Tag holds a {actual} value, not a {expected} value.")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },

    /// Read-only access to a key that does not exist
    #[error("'{key}' is not a valid key nor can it be created on a read-only view")]
    KeyNotFound { key: String },

    /// Positional removal outside of an entry list
    #[error("The Tag Entry List has no index {index}.")]
    EntryIndexOutOfRange { index: usize, len: usize },
}

impl TagError {
    /// Check if this error came from constructing a tag value
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            TagError::InvalidHint { .. } | TagError::Coercion { .. }
        )
    }

    /// Check if this error is a wrong-variant access
    pub fn is_type_error(&self) -> bool {
        matches!(self, TagError::WrongType { .. })
    }

    /// Check if this error is an out-of-range key or index access
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            TagError::KeyNotFound { .. } | TagError::EntryIndexOutOfRange { .. }
        )
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            TagError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

impl From<TagError> for crate::Error {
    fn from(err: TagError) -> Self {
        crate::Error::Tag(err)
    }
}
