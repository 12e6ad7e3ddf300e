//! Board geometry - ranks, files, and squares

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Board edge length
pub const BOARD_SIZE: usize = 8;

/// Row index on the board, rank 1 through rank 8
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub const ALL: [Rank; BOARD_SIZE] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    /// Zero-based grid index (rank 1 is index 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Rank> {
        if index < BOARD_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// Column index on the board, file A through file H
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; BOARD_SIZE] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Zero-based grid index (file A is index 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<File> {
        if index < BOARD_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.index() as u8) as char)
    }
}

/// A board coordinate, identified by rank and file
///
/// Squares are values, not owned objects: they key piece lookups but carry
/// no state of their own. Parses from and displays as algebraic notation:
///
/// ```
/// use pawnboard_core::board::{File, Rank, Square};
///
/// let sq: Square = "a7".parse().unwrap();
/// assert_eq!(sq, Square::new(Rank::Seven, File::A));
/// assert_eq!(sq.to_string(), "a7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub rank: Rank,
    pub file: File,
}

impl Square {
    pub const fn new(rank: Rank, file: File) -> Self {
        Self { rank, file }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// Failure to parse algebraic notation into a [`Square`]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("expected two characters of algebraic notation, got {0:?}")]
    Length(String),
    #[error("invalid file {0:?}, expected a-h")]
    InvalidFile(char),
    #[error("invalid rank {0:?}, expected 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(ParseSquareError::Length(s.to_string())),
        };

        let file_ch = file_ch.to_ascii_lowercase();
        if !file_ch.is_ascii_lowercase() || file_ch > 'h' {
            return Err(ParseSquareError::InvalidFile(file_ch));
        }
        let file = File::from_index((file_ch as u8 - b'a') as usize)
            .ok_or(ParseSquareError::InvalidFile(file_ch))?;

        let rank = rank_ch
            .to_digit(10)
            .and_then(|d| d.checked_sub(1))
            .and_then(|d| Rank::from_index(d as usize))
            .ok_or(ParseSquareError::InvalidRank(rank_ch))?;

        Ok(Square::new(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices() {
        assert_eq!(Rank::One.index(), 0);
        assert_eq!(Rank::Eight.index(), 7);
        assert_eq!(File::A.index(), 0);
        assert_eq!(File::H.index(), 7);
        assert_eq!(Rank::from_index(3), Some(Rank::Four));
        assert_eq!(Rank::from_index(8), None);
        assert_eq!(File::from_index(8), None);
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("a1".parse(), Ok(Square::new(Rank::One, File::A)));
        assert_eq!("h8".parse(), Ok(Square::new(Rank::Eight, File::H)));
        assert_eq!("C7".parse(), Ok(Square::new(Rank::Seven, File::C)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "i4".parse::<Square>(),
            Err(ParseSquareError::InvalidFile('i'))
        );
        assert_eq!(
            "a9".parse::<Square>(),
            Err(ParseSquareError::InvalidRank('9'))
        );
        assert_eq!(
            "a0".parse::<Square>(),
            Err(ParseSquareError::InvalidRank('0'))
        );
        assert!(matches!(
            "a10".parse::<Square>(),
            Err(ParseSquareError::Length(_))
        ));
        assert!(matches!("".parse::<Square>(), Err(ParseSquareError::Length(_))));
    }

    #[test]
    fn test_display_round_trip() {
        for rank in Rank::ALL {
            for file in File::ALL {
                let sq = Square::new(rank, file);
                assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
            }
        }
    }
}
