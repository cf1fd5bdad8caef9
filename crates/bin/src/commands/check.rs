//! Check command - loads boards through the command queue and reports failures.

use std::path::PathBuf;

use corkboard::commands::{Command, CommandQueue, Target};
use corkboard::file::{FileDialog, FileError, open_requested_boards, request_open};

use crate::cli::CheckArgs;
use crate::output::{OutputFormat, print_table};

/// Dialog that "selects" the paths given on the command line.
struct ArgsDialog {
    paths: Vec<PathBuf>,
}

impl FileDialog for ArgsDialog {
    fn open(&mut self) -> Result<Option<PathBuf>, FileError> {
        Ok(self.paths.first().cloned())
    }

    fn open_multiple(&mut self) -> Result<Vec<PathBuf>, FileError> {
        Ok(self.paths.clone())
    }

    fn save(&mut self) -> Result<Option<PathBuf>, FileError> {
        Ok(None)
    }
}

/// Run the check command
pub fn run(args: &CheckArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut dialog = ArgsDialog {
        paths: args.paths.clone(),
    };
    let mut queue = CommandQueue::new();
    let requested = request_open(&mut dialog, &mut queue);
    let loaded = open_requested_boards(&mut queue);

    let failures: Vec<String> = queue
        .drain(Target::WidgetManager)
        .filter(|(command, _)| *command == Command::CreateErrorWindow)
        .map(|(_, message)| message)
        .collect();

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = loaded
                .iter()
                .map(|(path, board)| {
                    vec![
                        path.display().to_string(),
                        board.len().to_string(),
                        board.connections.len().to_string(),
                    ]
                })
                .collect();
            print_table(&["BOARD", "POSTS", "CONNECTIONS"], &rows);
            for failure in &failures {
                eprintln!("error: {failure}");
            }
        }
        OutputFormat::Json => {
            let boards: Vec<_> = loaded
                .iter()
                .map(|(path, board)| {
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "posts": board.len(),
                        "connections": board.connections.len(),
                    })
                })
                .collect();
            let value = serde_json::json!({
                "loaded": boards,
                "errors": failures,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {requested} boards failed to load", failures.len()).into())
    }
}
