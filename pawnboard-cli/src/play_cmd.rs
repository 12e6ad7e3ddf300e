//! Play command - apply moves read from stdin

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use pawnboard_core::{Color, Square};

use crate::show_cmd::{format_grid, load_board};

#[derive(Args)]
pub struct PlayArgs {
    /// Setup JSON file (standard arrangement when omitted)
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,
}

/// Read `FROM TO` pairs in algebraic notation, one per line, applying each
/// to the board and reprinting grid and scores. Blank lines are skipped;
/// unparseable lines are reported and the loop continues.
pub fn run(args: PlayArgs) -> Result<()> {
    let mut board = load_board(args.setup.as_deref())?;
    println!("{}", format_grid(&board.render()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (from, to) = match parse_move(input) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!("ignoring {:?}: {}", input, e);
                continue;
            }
        };

        // apply_move's return value never signals success, so legality is
        // checked up front for the log line.
        if board.can_move(from, to) {
            board.apply_move(from, to);
            tracing::info!("applied {} {}", from, to);
        } else {
            tracing::warn!("rejected {} {}", from, to);
        }

        println!("{}", format_grid(&board.render()));
        println!(
            "losses: white {} black {}",
            board.score(Color::White),
            board.score(Color::Black)
        );
    }

    Ok(())
}

/// Parse a `FROM TO` pair, e.g. `a7 a6`
fn parse_move(input: &str) -> Result<(Square, Square)> {
    let mut tokens = input.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(from), Some(to), None) => Ok((from.parse()?, to.parse()?)),
        _ => Err(anyhow!("expected two squares, e.g. \"a7 a6\"")),
    }
}
