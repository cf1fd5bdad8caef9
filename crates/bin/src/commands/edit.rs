//! Board editing commands - each applies one mutation and writes the board back.

use std::path::Path;

use corkboard::Board;
use corkboard::file::{load_board, save_board, with_board_extension, write_table};
use corkboard::parsing::board_to_table;

use crate::cli::{ConnectArgs, NewArgs, PostArgs};
use crate::output::OutputFormat;

/// Run the new command
pub fn new(args: &NewArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let target = with_board_extension(&args.path);
    if target.exists() && !args.force {
        return Err(format!("{} already exists (use --force to overwrite)", target.display()).into());
    }

    let mut board = Board::new();
    for text in &args.texts {
        board.create_post_back(text.as_str());
    }
    let written = save_board(&target, &board)?;
    report(&written, &board, format)
}

/// Run the connect command
pub fn connect(args: &ConnectArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    edit_in_place(&args.path, format, |board| {
        board.connect(args.from, args.to)?;
        Ok(())
    })
}

/// Run the erase command
pub fn erase(args: &PostArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    edit_in_place(&args.path, format, |board| {
        let cursor = board.cursor(args.idx)?;
        let (_, removed) = board.erase(cursor)?;
        tracing::info!(idx = args.idx, title = removed.title(), "Erased post");
        Ok(())
    })
}

/// Run the move-last command
pub fn move_last(args: &PostArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    edit_in_place(&args.path, format, |board| {
        let moved = board.move_to_last_index(args.idx)?;
        tracing::info!(from = args.idx, to = moved.index(), "Moved post");
        Ok(())
    })
}

fn edit_in_place<F>(path: &Path, format: OutputFormat, edit: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut Board) -> Result<(), Box<dyn std::error::Error>>,
{
    let mut board = load_board(path)?;
    edit(&mut board)?;
    write_table(path, &board_to_table(&board)?)?;
    report(path, &board, format)
}

fn report(path: &Path, board: &Board, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => println!(
            "{}: {} posts, {} connections",
            path.display(),
            board.len(),
            board.connections.len()
        ),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": path.display().to_string(),
                "posts": board.len(),
                "connections": board.connections.len(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
