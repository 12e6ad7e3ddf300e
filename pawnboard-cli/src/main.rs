//! PAWNBOARD CLI - Command-line interface
//!
//! Commands:
//! - show: print the rendered board for a setup
//! - play: apply moves read from stdin, reprinting board and scores

use clap::{Parser, Subcommand};

mod play_cmd;
mod show_cmd;

#[derive(Parser)]
#[command(name = "pawnboard")]
#[command(about = "Minimal pawn-only board engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendered board
    Show(show_cmd::ShowArgs),
    /// Read FROM TO move pairs from stdin and apply them
    Play(play_cmd::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => show_cmd::run(args),
        Commands::Play(args) => play_cmd::run(args),
    }
}
