use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("corkboard=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    match &cli.command {
        Commands::Show(args) => commands::show::run(args, format),
        Commands::Check(args) => commands::check::run(args, format),
        Commands::Convert(args) => commands::convert::run(args, format),
        Commands::New(args) => commands::edit::new(args, format),
        Commands::Connect(args) => commands::edit::connect(args, format),
        Commands::Erase(args) => commands::edit::erase(args, format),
        Commands::MoveLast(args) => commands::edit::move_last(args, format),
    }
}
