//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_core::game::prelude::*;
//! ```

pub use super::{
    choose_move, choose_move_with_depth, set_difficulty, Color, Difficulty, Game, GameBuilder,
    Move, MoveList, MoveResult, Piece, PieceKind, SearchOutcome, Square, SquareError,
};
