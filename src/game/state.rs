//! Game state: the 8x8 grid and the side to move.
//!
//! The grid is mutated through exactly two primitives: `commit_move`, the
//! public mutator that flips the turn, and `probe`, a crate-internal
//! scoped guard for speculative apply/undo during check resolution and
//! search. Probes restore the grid on drop, on every exit path.

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::types::{Color, Move, MoveResult, Piece, PieceKind, Square};

/// Back rank layout, left to right from column 0.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Authoritative game state: board grid plus side to move.
///
/// Row 0 is Black's home rank, row 7 is White's. The state is owned
/// exclusively by the host and mutated only through `commit_move`
/// (and `promote` after a promotion is reported).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) turn: Color,
}

impl Game {
    /// Create a game set up in the standard opening position.
    #[must_use]
    pub fn new(starting: Color) -> Self {
        let mut game = Game {
            grid: [[None; 8]; 8],
            turn: starting,
        };
        game.reset(starting);
        game
    }

    /// Reset to the standard opening position with `starting` to move.
    pub fn reset(&mut self, starting: Color) {
        self.grid = [[None; 8]; 8];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            self.grid[0][col] = Some(Piece::new(kind, Color::Black));
            self.grid[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            self.grid[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            self.grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        self.turn = starting;
    }

    /// Create a game with an empty grid (used by `GameBuilder`).
    #[must_use]
    pub(crate) fn empty(turn: Color) -> Self {
        Game {
            grid: [[None; 8]; 8],
            turn,
        }
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.0][sq.1]
    }

    /// Locate the king of `color`. `None` if it is absent from the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                if self.grid[row][col] == Some(Piece::new(PieceKind::King, color)) {
                    return Some(Square(row, col));
                }
            }
        }
        None
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.0][sq.1] = Some(piece);
    }

    /// Apply a move and flip the turn.
    ///
    /// The caller must have established legality via `is_legal_move`; no
    /// re-validation happens here and an illegal move is applied as-is.
    /// A pawn arriving on its promotion row is reported with
    /// `promoted = true` but keeps its kind; the caller chooses the new
    /// kind through [`Game::promote`].
    pub fn commit_move(&mut self, from: Square, to: Square) -> MoveResult {
        let moving = self.grid[from.0][from.1];
        let captured = self.grid[to.0][to.1];

        self.grid[to.0][to.1] = moving;
        self.grid[from.0][from.1] = None;

        let promoted = moving
            .is_some_and(|p| p.kind == PieceKind::Pawn && to.0 == p.color.promotion_row());

        self.turn = self.turn.opponent();
        MoveResult { captured, promoted }
    }

    /// Convenience for committing a generated [`Move`].
    pub fn commit(&mut self, mv: Move) -> MoveResult {
        self.commit_move(mv.from, mv.to)
    }

    /// Replace the kind of the piece on `sq`, keeping its color.
    ///
    /// Called by the host after `commit_move` reports `promoted = true`.
    /// Returns false when the square is empty.
    pub fn promote(&mut self, sq: Square, kind: PieceKind) -> bool {
        match self.grid[sq.0][sq.1] {
            Some(piece) => {
                self.grid[sq.0][sq.1] = Some(Piece::new(kind, piece.color));
                true
            }
            None => false,
        }
    }

    /// Speculatively apply `from -> to` as a raw grid swap.
    ///
    /// The returned guard restores the grid exactly when dropped and
    /// dereferences to the probed `Game`, so probes nest. The turn flag is
    /// never touched.
    pub(crate) fn probe(&mut self, from: Square, to: Square) -> Probe<'_> {
        let saved = self.grid[to.0][to.1];
        self.grid[to.0][to.1] = self.grid[from.0][from.1];
        self.grid[from.0][from.1] = None;
        Probe {
            game: self,
            from,
            to,
            saved,
        }
    }
}

/// Scoped speculative move: applied on construction, undone on drop.
pub(crate) struct Probe<'a> {
    game: &'a mut Game,
    from: Square,
    to: Square,
    saved: Option<Piece>,
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.game.grid[self.from.0][self.from.1] = self.game.grid[self.to.0][self.to.1];
        self.game.grid[self.to.0][self.to.1] = self.saved;
    }
}

impl Deref for Probe<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(piece) => write!(f, "{} ", piece.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move", self.turn)
    }
}
