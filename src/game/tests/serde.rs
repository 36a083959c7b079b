//! Serialization round-trips, only built with the `serde` feature.

use crate::game::{Color, Difficulty, Move, MoveResult, Piece, PieceKind, Square};

#[test]
fn square_round_trips() {
    let sq = Square(4, 4);
    let json = serde_json::to_string(&sq).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);
}

#[test]
fn piece_round_trips() {
    let piece = Piece::new(PieceKind::Knight, Color::Black);
    let json = serde_json::to_string(&piece).unwrap();
    assert_eq!(serde_json::from_str::<Piece>(&json).unwrap(), piece);
}

#[test]
fn move_round_trips() {
    let mv = Move::new(Square(6, 4), Square(4, 4));
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
}

#[test]
fn move_result_round_trips() {
    let result = MoveResult {
        captured: Some(Piece::new(PieceKind::Queen, Color::White)),
        promoted: true,
    };
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(serde_json::from_str::<MoveResult>(&json).unwrap(), result);
}

#[test]
fn difficulty_round_trips() {
    for level in [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ] {
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(serde_json::from_str::<Difficulty>(&json).unwrap(), level);
    }
}
