//! Fluent builder for constructing positions.
//!
//! Allows setting up a position piece by piece rather than replaying a
//! game from the opening layout.
//!
//! # Example
//! ```
//! use chess_core::game::{Color, GameBuilder, PieceKind, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::state::Game;
use super::types::{Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard opening position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let game = Game::new(Color::White);
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if let Some(piece) = game.piece_at(sq) {
                    builder.pieces.push((sq, piece));
                }
            }
        }
        builder
    }

    /// Place a piece, replacing any existing piece on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the game state.
    #[must_use]
    pub fn build(self) -> Game {
        let mut game = Game::empty(self.side_to_move);
        for (square, piece) in self.pieces {
            game.set_piece(square, piece);
        }
        game
    }
}
