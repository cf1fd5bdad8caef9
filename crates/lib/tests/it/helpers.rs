use std::path::PathBuf;

use corkboard::{
    Board,
    board::Connection,
    file::{FileDialog, FileError},
    parsing::BoardParser,
};

// ==========================
// BOARD FACTORIES
// ==========================

/// Creates a board of `n` posts titled "Post 1" through "Post n"
pub fn setup_board(n: usize) -> Board {
    let mut board = Board::new();
    for i in 1..=n {
        board.create_post_back(format!("Post {i}"));
    }
    board
}

/// Creates a board of `n` posts with the given connections
pub fn setup_connected_board(n: usize, connections: &[(usize, usize)]) -> Board {
    let mut board = setup_board(n);
    for &(from, to) in connections {
        board
            .connect(from, to)
            .expect("Failed to connect posts in test setup");
    }
    board
}

/// Parses board text with the default parser
pub fn parse_board(text: &str) -> Board {
    BoardParser::new()
        .parse_str(text)
        .expect("Failed to parse test board")
}

// ==========================
// ASSERTIONS
// ==========================

/// Assert that every post's Idx matches its position
pub fn assert_indexes_valid(board: &Board) {
    for (i, post) in board.iter().enumerate() {
        assert_eq!(post.idx(), i + 1, "Post at position {} has a stale Idx", i + 1);
    }
}

/// Assert that the board holds exactly `expected` connections, in order
pub fn assert_connections(board: &Board, expected: &[(usize, usize)]) {
    let actual: Vec<(usize, usize)> = board
        .connections
        .iter()
        .map(|Connection { from, to }| (*from, *to))
        .collect();
    assert_eq!(actual, expected, "Connection mismatch");
}

/// Assert that the board's post titles are `expected`, in order
pub fn assert_titles(board: &Board, expected: &[&str]) {
    let actual: Vec<&str> = board.iter().map(|post| post.title()).collect();
    assert_eq!(actual, expected, "Post order mismatch");
}

// ==========================
// FILE DIALOG DOUBLE
// ==========================

/// A [`FileDialog`] answering from canned paths.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    pub open_paths: Vec<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub fail: bool,
}

impl ScriptedDialog {
    pub fn opening(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            open_paths: paths.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn saving(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), FileError> {
        if self.fail {
            return Err(FileError::Dialog {
                reason: "dialog unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl FileDialog for ScriptedDialog {
    fn open(&mut self) -> Result<Option<PathBuf>, FileError> {
        self.check()?;
        Ok(self.open_paths.first().cloned())
    }

    fn open_multiple(&mut self) -> Result<Vec<PathBuf>, FileError> {
        self.check()?;
        Ok(self.open_paths.clone())
    }

    fn save(&mut self) -> Result<Option<PathBuf>, FileError> {
        self.check()?;
        Ok(self.save_path.clone())
    }
}
