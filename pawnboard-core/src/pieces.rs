//! Piece colors and the pawn piece

use crate::board::{Rank, Square};
use serde::{Deserialize, Serialize};

/// Piece color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Signed rank gap in this color's advance direction.
    ///
    /// Black pawns advance toward increasing rank index, White pawns toward
    /// decreasing rank index; a legal single-step advance has gap 1.
    pub fn forward_gap(self, from: Rank, to: Rank) -> isize {
        let (from, to) = (from.index() as isize, to.index() as isize);
        match self {
            Color::Black => to - from,
            Color::White => from - to,
        }
    }
}

/// A pawn on the board
///
/// Color is fixed at creation. Position changes on a successful move; the
/// alive flag drops to `false` when the pawn is captured or killed and
/// never comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    pub position: Square,
    pub alive: bool,
}

impl Piece {
    pub const fn new(color: Color, position: Square) -> Self {
        Self {
            color,
            position,
            alive: true,
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::File;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_forward_gap_directions() {
        // White advances toward rank 1, Black toward rank 8
        assert_eq!(Color::White.forward_gap(Rank::Seven, Rank::Six), 1);
        assert_eq!(Color::White.forward_gap(Rank::Seven, Rank::Eight), -1);
        assert_eq!(Color::Black.forward_gap(Rank::Two, Rank::Three), 1);
        assert_eq!(Color::Black.forward_gap(Rank::Two, Rank::One), -1);
        assert_eq!(Color::Black.forward_gap(Rank::Two, Rank::Six), 4);
    }

    #[test]
    fn test_new_piece_is_alive() {
        let piece = Piece::new(Color::White, Square::new(Rank::Seven, File::A));
        assert!(piece.alive);
        assert_eq!(piece.color(), Color::White);
    }
}
