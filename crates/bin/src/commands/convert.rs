//! Convert command - re-encodes a board file.

use corkboard::file::{load_board, save_board};

use crate::cli::ConvertArgs;
use crate::output::OutputFormat;

/// Run the convert command
pub fn run(args: &ConvertArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let board = load_board(&args.input)?;
    let written = save_board(&args.output, &board)?;
    tracing::info!(from = %args.input.display(), to = %written.display(), "Converted board");

    match format {
        OutputFormat::Human => println!("Wrote {}", written.display()),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": written.display().to_string(),
                "posts": board.len(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
