//! Show command - render a board once, plus shared formatting utilities

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pawnboard_core::{Board, File, Grid, Rank, Setup};

#[derive(Args)]
pub struct ShowArgs {
    /// Setup JSON file (standard arrangement when omitted)
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let mut board = load_board(args.setup.as_deref())?;
    println!("{}", format_grid(&board.render()));
    Ok(())
}

/// Build a board from a setup file, or the standard arrangement
pub fn load_board(path: Option<&Path>) -> Result<Board> {
    let setup = match path {
        Some(p) => Setup::load(p)
            .with_context(|| format!("Failed to load setup: {}", p.display()))?,
        None => Setup::default(),
    };
    Ok(setup.to_board())
}

/// Format the grid with rank numbers alongside and file letters below
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for rank in Rank::ALL {
        out.push_str(&format!("{} ", rank));
        for file in File::ALL {
            out.push(' ');
            out.push(grid[rank.index()][file.index()]);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for file in File::ALL {
        out.push_str(&format!(" {}", file));
    }
    out
}
