//! Conversion between boards and their persisted forms.
//!
//! [`BoardParser`] bundles a pair of conversion strategies (table to board
//! and back) with the table-literal codec, so a caller can go from text to a
//! [`Board`] and back in one call. The default strategies live in
//! [`strategies`].
//!
//! ```
//! use corkboard::parsing::BoardParser;
//!
//! let parser = BoardParser::new();
//! let board = parser
//!     .parse_str(r#"{ posts = { { content = { "a", "b" }, tags = { x = { 1, 2 } } } } }"#)
//!     .unwrap();
//! assert_eq!(board.len(), 1);
//! assert_eq!(board[1].content[2], "b");
//!
//! let text = parser.to_string_pretty(&board).unwrap();
//! assert_eq!(parser.parse_str(&text).unwrap(), board);
//! ```

use tracing::debug;

use crate::Result;
use crate::board::Board;
use crate::table::{self, Table};

pub mod errors;
pub mod strategies;

pub use errors::ParseError;
pub use strategies::{board_to_table, table_to_board};

/// Strategy turning a table into a board
pub type TableIntoBoard = fn(&Table) -> std::result::Result<Board, ParseError>;

/// Strategy turning a board into a table
pub type BoardIntoTable = fn(&Board) -> std::result::Result<Table, ParseError>;

/// Board reader/writer over a pair of conversion strategies.
#[derive(Debug, Clone, Copy)]
pub struct BoardParser {
    parse_table: TableIntoBoard,
    parse_board: BoardIntoTable,
}

impl BoardParser {
    /// A parser using the default strategies
    pub fn new() -> Self {
        Self::with_strategies(table_to_board, board_to_table)
    }

    /// A parser using custom strategies
    pub fn with_strategies(parse_table: TableIntoBoard, parse_board: BoardIntoTable) -> Self {
        Self {
            parse_table,
            parse_board,
        }
    }

    pub fn table_to_board(&self, table: &Table) -> std::result::Result<Board, ParseError> {
        (self.parse_table)(table)
    }

    pub fn board_to_table(&self, board: &Board) -> std::result::Result<Table, ParseError> {
        (self.parse_board)(board)
    }

    /// Reads table-literal text into a board
    pub fn parse_str(&self, text: &str) -> Result<Board> {
        let table = table::from_str(text)?;
        debug!(bytes = text.len(), "Read board table");
        Ok(self.table_to_board(&table)?)
    }

    /// Writes a board as table-literal text
    pub fn to_string_pretty(&self, board: &Board) -> Result<String> {
        let table = self.board_to_table(board)?;
        Ok(table::to_string_pretty(&table)?)
    }
}

impl Default for BoardParser {
    fn default() -> Self {
        Self::new()
    }
}
