//! Loading and saving boards on disk.
//!
//! Boards are stored as table-literal text with the [`BOARD_EXTENSION`]
//! extension. A `.json` path stores the same table as JSON instead.
//!
//! Loading always builds a fresh [`Board`] and hands it back only once it is
//! complete, so a failed load never leaves a partially populated board
//! behind. None of these functions synchronise; callers that load on a
//! worker thread must not share the target board until the call returns.
//!
//! The [`FileDialog`] trait stands in for the path picker, and
//! [`request_open`] / [`open_requested_boards`] connect it to a
//! [`CommandQueue`].

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Result;
use crate::board::Board;
use crate::commands::{Command, CommandQueue, Target};
use crate::parsing::BoardParser;
use crate::table::{self, Table, TableError};

pub mod errors;

pub use errors::FileError;

/// Extension of board files
pub const BOARD_EXTENSION: &str = "lua";

/// Extension selecting the JSON encoding
pub const JSON_EXTENSION: &str = "json";

/// On-disk encoding of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFormat {
    /// Table-literal text
    Lua,
    Json,
}

impl BoardFormat {
    /// `Json` for `.json` paths, `Lua` for anything else
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(JSON_EXTENSION) => BoardFormat::Json,
            _ => BoardFormat::Lua,
        }
    }
}

/// Appends `.lua` unless the path already ends with it.
///
/// `notes` becomes `notes.lua` and `notes.txt` becomes `notes.txt.lua`.
pub fn with_board_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == BOARD_EXTENSION) {
        return path.to_path_buf();
    }
    let mut raw = OsString::from(path.as_os_str());
    raw.push(".");
    raw.push(BOARD_EXTENSION);
    PathBuf::from(raw)
}

/// Reads a table from `path`, choosing the encoding by extension
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Read table file");
    match BoardFormat::from_path(path) {
        BoardFormat::Lua => Ok(table::from_str(&text)?),
        BoardFormat::Json => Ok(serde_json::from_str::<Table>(&text).map_err(|e| TableError::Json {
            reason: e.to_string(),
        })?),
    }
}

/// Writes `table` to `path`, choosing the encoding by extension
pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut text = match BoardFormat::from_path(path) {
        BoardFormat::Lua => table::to_string_pretty(table)?,
        BoardFormat::Json => serde_json::to_string_pretty(table).map_err(|e| TableError::Json {
            reason: e.to_string(),
        })?,
    };
    text.push('\n');
    fs::write(path, &text).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote table file");
    Ok(())
}

/// Loads a board with the default conversions
pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    load_board_with(&BoardParser::new(), path)
}

/// Loads a board with the conversions of `parser`
pub fn load_board_with(parser: &BoardParser, path: impl AsRef<Path>) -> Result<Board> {
    let table = read_table(&path)?;
    let board = parser.table_to_board(&table)?;
    debug!(path = %path.as_ref().display(), posts = board.len(), "Loaded board");
    Ok(board)
}

/// Saves a board and returns the path actually written.
///
/// `.json` paths are kept as they are; any other path gets the board
/// extension appended by [`with_board_extension`].
pub fn save_board(path: impl AsRef<Path>, board: &Board) -> Result<PathBuf> {
    save_board_with(&BoardParser::new(), path, board)
}

/// [`save_board`] with the conversions of `parser`
pub fn save_board_with(parser: &BoardParser, path: impl AsRef<Path>, board: &Board) -> Result<PathBuf> {
    let path = path.as_ref();
    let path = match BoardFormat::from_path(path) {
        BoardFormat::Json => path.to_path_buf(),
        BoardFormat::Lua => with_board_extension(path),
    };
    let table = parser.board_to_table(board)?;
    write_table(&path, &table)?;
    debug!(path = %path.display(), posts = board.len(), "Saved board");
    Ok(path)
}

/// Path picker used by the open and save flows.
pub trait FileDialog {
    /// One path, or `None` if the user cancelled
    fn open(&mut self) -> std::result::Result<Option<PathBuf>, FileError>;

    /// Any number of paths; empty if the user cancelled
    fn open_multiple(&mut self) -> std::result::Result<Vec<PathBuf>, FileError>;

    /// Destination path, or `None` if the user cancelled
    fn save(&mut self) -> std::result::Result<Option<PathBuf>, FileError>;
}

/// Asks `dialog` for files and queues an `OpenFile` command per path.
///
/// A dialog failure, or a path that is not valid UTF-8, is queued as an error
/// window instead. Returns the number of paths queued.
pub fn request_open(dialog: &mut impl FileDialog, queue: &mut CommandQueue) -> usize {
    match dialog.open_multiple() {
        Ok(paths) => {
            let mut queued = 0;
            for path in &paths {
                match path.to_str() {
                    Some(payload) => {
                        queue.push(Target::Application, Command::OpenFile, payload);
                        queued += 1;
                    }
                    None => queue.report_error(format!(
                        "Cannot open '{}': the path is not valid UTF-8.",
                        path.display()
                    )),
                }
            }
            queued
        }
        Err(e) => {
            queue.report_error(e.to_string());
            0
        }
    }
}

/// Drains the application queue, loading a board for each `OpenFile`.
///
/// Files that fail to load are reported as error windows. Other application
/// commands stay queued in their original order.
pub fn open_requested_boards(queue: &mut CommandQueue) -> Vec<(PathBuf, Board)> {
    let pending: Vec<_> = queue.drain(Target::Application).collect();
    let mut boards = Vec::new();
    for (command, payload) in pending {
        if command != Command::OpenFile {
            queue.push(Target::Application, command, payload);
            continue;
        }
        let path = PathBuf::from(payload);
        match load_board(&path) {
            Ok(board) => boards.push((path, board)),
            Err(e) => queue.report_error(e.to_string()),
        }
    }
    boards
}

/// Asks `dialog` for a destination and saves `board` there.
///
/// Returns `Ok(None)` if the user cancelled.
pub fn request_save(dialog: &mut impl FileDialog, board: &Board) -> Result<Option<PathBuf>> {
    match dialog.save()? {
        Some(path) => save_board(path, board).map(Some),
        None => Ok(None),
    }
}
