//! Board state machine - occupancy, move validation, capture, rendering

use crate::board::{File, Rank, Square, BOARD_SIZE};
use crate::pieces::{Color, Piece};

// ============================================================================
// DISPLAY GRID
// ============================================================================

/// Textual display surface, indexed `[rank][file]`
pub type Grid = [[char; BOARD_SIZE]; BOARD_SIZE];

/// Marker for an unoccupied square
pub const EMPTY_CELL: char = '.';
/// Glyph for an alive white pawn
pub const WHITE_PAWN: char = '\u{2659}';
/// Glyph for an alive black pawn
pub const BLACK_PAWN: char = '\u{265F}';

fn glyph(color: Color) -> char {
    match color {
        Color::White => WHITE_PAWN,
        Color::Black => BLACK_PAWN,
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// The board: owns every piece of both colors plus a derived display grid.
///
/// Pieces are created once and never removed; capture only flips the alive
/// flag. The grid is not a source of truth - it is rebuilt from the piece
/// collection on every [`render`](Board::render) call.
///
/// Occupancy lookups scan the collection in insertion order; if two pieces
/// ever share a square (possible only through [`Board::with_pieces`], which
/// does not police its input) the earlier insertion wins.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Standard board: 8 white pawns on rank 7, 8 black pawns on rank 2
    pub fn new() -> Self {
        let mut board = Self {
            pieces: Vec::new(),
            grid: [[EMPTY_CELL; BOARD_SIZE]; BOARD_SIZE],
        };
        board.init_grid();
        board.init_pieces();
        board
    }

    /// Board with an externally supplied piece collection.
    ///
    /// Bypasses the default arrangement; used for custom setups. Keeping at
    /// most one alive piece per square is the caller's responsibility.
    pub fn with_pieces(pieces: Vec<Piece>) -> Self {
        Self {
            pieces,
            grid: [[EMPTY_CELL; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Reset the display grid to all empty markers
    pub fn init_grid(&mut self) {
        self.grid = [[EMPTY_CELL; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Repopulate the default pawns, replacing any prior collection
    pub fn init_pieces(&mut self) {
        let whites = File::ALL
            .iter()
            .map(|&file| Piece::new(Color::White, Square::new(Rank::Seven, file)));
        let blacks = File::ALL
            .iter()
            .map(|&file| Piece::new(Color::Black, Square::new(Rank::Two, file)));
        self.pieces = whites.chain(blacks).collect();
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// All pieces, both colors, alive and dead, in insertion order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece occupying the square, alive or dead
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece_index(square).map(|i| &self.pieces[i])
    }

    fn piece_index(&self, square: Square) -> Option<usize> {
        self.pieces.iter().position(|p| p.position == square)
    }

    // ========================================================================
    // MOVE VALIDATION
    // ========================================================================

    /// Whether the piece at `from` may advance to `to`.
    ///
    /// True iff `from` holds an alive piece and the move is a single-step
    /// advance on the same file in the piece's own direction. Occupancy of
    /// `to` is not inspected here.
    pub fn can_move(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some(piece) => piece.alive && Self::pawn_can_go(piece, to),
            None => false,
        }
    }

    /// Whether `from` and `to` are both occupied, by different colors.
    ///
    /// Checks raw occupancy only - a dead occupant still counts. False
    /// whenever either square is empty.
    pub fn is_opposing(&self, from: Square, to: Square) -> bool {
        match (self.piece_at(from), self.piece_at(to)) {
            (Some(a), Some(b)) => a.color() != b.color(),
            _ => false,
        }
    }

    /// Single-step pawn advance: same file, rank gap of exactly one in the
    /// color's forward direction. No diagonals, no double step, no captures
    /// by geometry.
    fn pawn_can_go(piece: &Piece, to: Square) -> bool {
        piece.position.file == to.file
            && piece.color().forward_gap(piece.position.rank, to.rank) == 1
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Validate and apply a move from `from` to `to`.
    ///
    /// On the legal path: an opposing occupant of `to` is marked dead, the
    /// vacated grid cell is cleared, and the mover's position is updated.
    /// On the illegal path nothing changes.
    ///
    /// Always returns `false`, applied or not - the return value never
    /// signals success. Callers must observe the board state instead.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        if self.can_move(from, to) {
            let mover = match self.piece_index(from) {
                Some(i) => i,
                None => return false,
            };

            if self.is_opposing(from, to) {
                if let Some(victim) = self.piece_index(to) {
                    self.pieces[victim].alive = false;
                }
            }

            let before = self.pieces[mover].position;
            self.grid[before.rank.index()][before.file.index()] = EMPTY_CELL;
            self.pieces[mover].position = to;
        }
        false
    }

    /// Mark the occupant of `square` dead; silently does nothing if empty
    pub fn kill(&mut self, square: Square) {
        if let Some(i) = self.piece_index(square) {
            self.pieces[i].alive = false;
        }
    }

    // ========================================================================
    // SCORING AND RENDERING
    // ========================================================================

    /// Number of `color`'s own pieces that have died, by capture or
    /// [`kill`](Board::kill). Note this counts losses, not captures made.
    pub fn score(&self, color: Color) -> usize {
        self.pieces
            .iter()
            .filter(|p| p.color() == color && !p.alive)
            .count()
    }

    /// Rebuild and return the display grid.
    ///
    /// Starts from a blank base every call, then marks each alive piece
    /// with its color's glyph. Dead pieces and marks from earlier renders
    /// leave no residue; two renders with no mutation in between are
    /// identical.
    pub fn render(&mut self) -> Grid {
        self.init_grid();
        for piece in self.pieces.iter().filter(|p| p.alive) {
            let pos = piece.position;
            self.grid[pos.rank.index()][pos.file.index()] = glyph(piece.color());
        }
        self.grid
    }
}

// ============================================================================
// TESTS
// ============================================================================
