//! Show command - lists the posts and connections of a board.

use corkboard::Post;
use corkboard::file::load_board;

use crate::cli::ShowArgs;
use crate::output::{OutputFormat, print_table};

/// Run the show command
pub fn run(args: &ShowArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let board = load_board(&args.path)?;

    match format {
        OutputFormat::Human => {
            println!("Posts:       {}", board.len());
            println!("Connections: {}", board.connections.len());
            if board.is_empty() {
                return Ok(());
            }

            println!();
            let rows: Vec<Vec<String>> = board.iter().map(post_row).collect();
            print_table(&["IDX", "TITLE", "UNITS", "TAGS", "POSITION"], &rows);

            if !board.connections.is_empty() {
                println!();
                let rows: Vec<Vec<String>> = board
                    .connections
                    .iter()
                    .map(|c| vec![c.from.to_string(), c.to.to_string()])
                    .collect();
                print_table(&["FROM", "TO"], &rows);
            }
        }
        OutputFormat::Json => {
            let posts: Vec<_> = board.iter().map(post_json).collect();
            let connections: Vec<_> = board.connections.iter().map(|c| [c.from, c.to]).collect();
            let value = serde_json::json!({
                "posts": posts,
                "connections": connections,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

fn post_row(post: &Post) -> Vec<String> {
    let tags: Vec<&str> = post.tags.keys().collect();
    vec![
        post.idx().to_string(),
        post.title().to_string(),
        post.content.len().to_string(),
        tags.join(","),
        format!("{}, {}", post.display_pos.x, post.display_pos.y),
    ]
}

fn post_json(post: &Post) -> serde_json::Value {
    let content: Vec<String> = post.content.iter().map(ToString::to_string).collect();
    let tags: serde_json::Map<String, serde_json::Value> = post
        .tags
        .iter()
        .map(|(key, values)| {
            let labels: Vec<&str> = values.iter().map(|v| v.label()).collect();
            (key.to_string(), serde_json::json!(labels))
        })
        .collect();
    serde_json::json!({
        "idx": post.idx(),
        "content": content,
        "tags": tags,
        "display_pos": [post.display_pos.x, post.display_pos.y],
        "color": post.color.map(|c| c.to_channels()),
    })
}
