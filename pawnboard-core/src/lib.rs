//! PAWNBOARD Core - Minimal pawn-only board engine
//!
//! This crate provides the core rules logic for PAWNBOARD:
//! - Board geometry (8x8 grid of rank/file squares)
//! - Pawn pieces in two colors with alive/dead status
//! - Single-step move validation, capture, and scoring
//! - Textual grid rendering
//!
//! There is deliberately no turn management, no promotion, no check
//! detection, and no AI; the engine tracks positions and legal single-step
//! pawn advances, nothing more.

pub mod board;
pub mod game;
pub mod pieces;
pub mod setup;

// Re-exports for convenient access
pub use board::{File, ParseSquareError, Rank, Square, BOARD_SIZE};
pub use game::{Board, Grid, BLACK_PAWN, EMPTY_CELL, WHITE_PAWN};
pub use pieces::{Color, Piece};
pub use setup::{Placement, Setup};
