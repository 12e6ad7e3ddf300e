//! Setup - named piece arrangements, loadable from JSON

use crate::board::{File, Rank, Square};
use crate::game::Board;
use crate::pieces::{Color, Piece};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One piece placement within a setup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub color: Color,
    pub square: Square,
}

/// A named board arrangement.
///
/// Setups exist so custom positions (test fixtures, puzzles, saved
/// arrangements) can live in JSON files instead of code. The default setup
/// is the standard one: white pawns across rank 7, black across rank 2.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub name: String,
    pub placements: Vec<Placement>,
}

impl Setup {
    /// Build a board with one alive piece per placement, in listed order
    pub fn to_board(&self) -> Board {
        let pieces = self
            .placements
            .iter()
            .map(|p| Piece::new(p.color, p.square))
            .collect();
        Board::with_pieces(pieces)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let setup: Setup = serde_json::from_str(&content)?;
        Ok(setup)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Setup {
    fn default() -> Self {
        let whites = File::ALL.iter().map(|&file| Placement {
            color: Color::White,
            square: Square::new(Rank::Seven, file),
        });
        let blacks = File::ALL.iter().map(|&file| Placement {
            color: Color::Black,
            square: Square::new(Rank::Two, file),
        });
        Self {
            name: "standard".to_string(),
            placements: whites.chain(blacks).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_standard_board() {
        let from_setup = Setup::default().to_board();
        let standard = Board::new();
        assert_eq!(from_setup.pieces(), standard.pieces());
    }

    #[test]
    fn test_to_board_places_each_entry() {
        let setup = Setup {
            name: "duel".to_string(),
            placements: vec![
                Placement {
                    color: Color::White,
                    square: "d5".parse().unwrap(),
                },
                Placement {
                    color: Color::Black,
                    square: "d4".parse().unwrap(),
                },
            ],
        };
        let board = setup.to_board();
        assert_eq!(board.pieces().len(), 2);
        let white = board.piece_at("d5".parse().unwrap()).unwrap();
        assert_eq!(white.color(), Color::White);
        assert!(white.alive);
    }

    #[test]
    fn test_json_round_trip() {
        let setup = Setup::default();
        let json = serde_json::to_string(&setup).unwrap();
        let back: Setup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, setup);
    }
}
