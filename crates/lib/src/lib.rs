//!
//! Corkboard: the core of a note-board editor.
//!
//! A board holds freeform posts connected by directed links. This crate
//! models the board and keeps it consistent under editing, and it converts
//! boards to and from their on-disk table format.
//!
//! ## Core Concepts
//!
//! * **IndexedSequence (`sequence::IndexedSequence`)**: A 1-based container over a `Vec`, optionally growing on access.
//! * **Tags (`tags::Tags`)**: Per-post metadata mapping keys to ordered lists of `tags::TagValue` scalars.
//! * **Posts (`post::Post`)**: Content units, tags, a display position and a colour, plus the post's Idx (its position on the board).
//! * **Boards (`board::Board`)**: The post container. Every insert, erase and move renumbers the posts and rewrites `board::Connection`s so no edge dangles.
//! * **Tables (`table::Table`)**: The format-agnostic nested form of a board file, with a table-literal text codec.
//! * **Parsing (`parsing::BoardParser`)**: Conversion strategies between tables and boards.
//! * **Files (`file`)**: Loading and saving boards, and the file-dialog and command-queue plumbing around it.

pub mod board;
pub mod commands;
pub mod file;
pub mod parsing;
pub mod post;
pub mod sequence;
pub mod table;
pub mod tags;

pub use board::Board;
pub use post::Post;

/// Result type used throughout the Corkboard library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Corkboard library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from 1-based sequence access
    #[error(transparent)]
    Sequence(sequence::SequenceError),

    /// Structured errors from tag construction and lookup
    #[error(transparent)]
    Tag(tags::TagError),

    /// Structured errors from board mutations
    #[error(transparent)]
    Board(board::BoardError),

    /// Structured errors from the table text codec
    #[error(transparent)]
    Table(table::TableError),

    /// Structured errors from table/board conversion
    #[error(transparent)]
    Parse(parsing::ParseError),

    /// Structured errors from the file boundary
    #[error(transparent)]
    File(file::FileError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Sequence(_) => "sequence",
            Error::Tag(_) => "tags",
            Error::Board(_) => "board",
            Error::Table(_) => "table",
            Error::Parse(_) => "parsing",
            Error::File(_) => "file",
        }
    }

    /// Check if this error is an access outside a permitted range.
    pub fn is_index_error(&self) -> bool {
        match self {
            Error::Sequence(err) => err.is_out_of_range(),
            Error::Tag(err) => err.is_out_of_range(),
            Error::Board(err) => err.is_invalid_position(),
            _ => false,
        }
    }

    /// Check if a table did not have the shape of a board.
    pub fn is_parsing_error(&self) -> bool {
        match self {
            Error::Parse(err) => err.is_deserialize_error(),
            _ => false,
        }
    }

    /// Check if text could not be read as a table at all.
    pub fn is_syntax_error(&self) -> bool {
        match self {
            Error::Table(err) => err.is_syntax_error() || err.is_json_error(),
            _ => false,
        }
    }

    /// Check if a board or table could not be written out.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Table(err) => err.is_serialization_error(),
            Error::Parse(err) => err.is_serialize_error(),
            _ => false,
        }
    }

    /// Check if this error is a tag construction or coercion failure.
    pub fn is_tag_error(&self) -> bool {
        match self {
            Error::Tag(err) => err.is_construction_error() || err.is_type_error(),
            Error::Parse(err) => err.is_tag_error(),
            _ => false,
        }
    }

    /// Check if this error is an invalid structural board operation.
    pub fn is_board_error(&self) -> bool {
        matches!(self, Error::Board(_))
    }

    /// Check if this error happened opening, writing or choosing a file.
    pub fn is_file_error(&self) -> bool {
        matches!(self, Error::File(_))
    }

    /// Check if a file to load does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::File(err) => err.is_not_found(),
            _ => false,
        }
    }
}
