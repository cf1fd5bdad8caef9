//! Error types for converting between tables and boards.

use thiserror::Error;

/// Shape-level failures while turning a [`Table`](crate::table::Table) into a
/// [`Board`](crate::board::Board), or a board into a table.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The top-level table has no usable `posts` sequence
    #[error("The file does not have a Posts table.")]
    MissingPosts,

    /// A post entry is not a table
    #[error("Post {index} is not a table.")]
    InvalidPost { index: usize },

    /// A post's `content` is missing or not a string / string sequence
    #[error("Post has no valid 'content' field.")]
    InvalidContent,

    /// A tag key could not be converted
    #[error("Cannot parse '{key}' key: {reason}")]
    InvalidTag { key: String, reason: String },

    /// A tag value is neither a boolean, number nor string
    #[error("Unknown tag type.")]
    UnknownTagType,

    /// A post `color` is not three channel values
    #[error("Post color is not valid.")]
    InvalidColor,

    /// A `board_config` colour is not three channel values
    #[error("Board color '{key}' is not valid.")]
    InvalidBoardColor { key: String },

    /// A `connections` entry is not a pair of Idx values
    #[error("Connection {index} is not a valid pair of post indexes.")]
    InvalidConnection { index: usize },

    /// `display_pos` has two entries but they are not numbers
    #[error("Post display position is not numeric.")]
    InvalidDisplayPos,

    /// A content unit has no table representation
    #[error("Cannot serialize {content_type} content.")]
    UnserializableContent { content_type: &'static str },
}

impl ParseError {
    /// Check if this error came from reading a table
    pub fn is_deserialize_error(&self) -> bool {
        !self.is_serialize_error()
    }

    /// Check if this error came from writing a board
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, ParseError::UnserializableContent { .. })
    }

    /// Check if this error concerns a post's tags
    pub fn is_tag_error(&self) -> bool {
        matches!(
            self,
            ParseError::InvalidTag { .. } | ParseError::UnknownTagType
        )
    }
}

impl From<ParseError> for crate::Error {
    fn from(err: ParseError) -> Self {
        crate::Error::Parse(err)
    }
}
