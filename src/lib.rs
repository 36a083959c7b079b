pub mod game;

pub use game::{Color, Game, GameBuilder, Move, MoveResult, Piece, PieceKind, Square};
pub use game::{
    choose_move, choose_move_with_depth, difficulty, set_difficulty, Difficulty, SearchOutcome,
};
