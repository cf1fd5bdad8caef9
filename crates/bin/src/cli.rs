//! CLI argument definitions for the Corkboard binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned tables for people
    Human,
    /// One JSON document per command
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Inspect and edit Corkboard note boards
#[derive(Parser, Debug)]
#[command(name = "corkboard")]
#[command(about = "Corkboard: inspect, convert and edit note boards")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", env = "CORKBOARD_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the posts and connections of a board
    Show(ShowArgs),
    /// Load one or more boards and report any that fail
    Check(CheckArgs),
    /// Re-encode a board (.lua or .json, chosen by extension)
    Convert(ConvertArgs),
    /// Create a board from post texts
    New(NewArgs),
    /// Connect two posts
    Connect(ConnectArgs),
    /// Erase a post and the connections touching it
    Erase(PostArgs),
    /// Move a post to the last position
    MoveLast(PostArgs),
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Board file
    pub path: PathBuf,
}

/// Arguments for the check command
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Board files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the convert command
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Board file to read
    pub input: PathBuf,
    /// Destination; `.json` writes JSON, anything else table text
    pub output: PathBuf,
}

/// Arguments for the new command
#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Destination board file (`.lua` is appended if missing)
    pub path: PathBuf,
    /// Text of each post, in order
    pub texts: Vec<String>,
    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the connect command
#[derive(clap::Args, Debug)]
pub struct ConnectArgs {
    /// Board file, rewritten in place
    pub path: PathBuf,
    /// Idx of the source post
    pub from: usize,
    /// Idx of the target post
    pub to: usize,
}

/// Arguments for commands addressing one post
#[derive(clap::Args, Debug)]
pub struct PostArgs {
    /// Board file, rewritten in place
    pub path: PathBuf,
    /// Idx of the post
    pub idx: usize,
}
