//! Speculative apply/undo integrity tests.
//!
//! Every query that probes the board (legality, checkmate, search) must
//! leave the grid bit-for-bit identical, at any probe nesting depth.

use crate::game::search::INFINITY;
use crate::game::{Color, Game, GameBuilder, PieceKind, Square};
use rand::prelude::*;

#[test]
fn probe_restores_a_capture() {
    let mut game = GameBuilder::new()
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .piece(Square(0, 4), Color::Black, PieceKind::King)
        .piece(Square(4, 3), Color::White, PieceKind::Rook)
        .piece(Square(4, 6), Color::Black, PieceKind::Queen)
        .build();
    let snapshot = game.clone();

    {
        let probe = game.probe(Square(4, 3), Square(4, 6));
        assert_eq!(
            probe.piece_at(Square(4, 6)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert!(probe.piece_at(Square(4, 3)).is_none());
    }

    assert_eq!(game, snapshot);
}

#[test]
fn nested_probes_unwind_exactly() {
    let mut game = Game::new(Color::White);
    let snapshot = game.clone();

    {
        let mut first = game.probe(Square(6, 4), Square(4, 4));
        {
            let mut second = first.probe(Square(1, 4), Square(3, 4));
            {
                let third = second.probe(Square(7, 3), Square(3, 7));
                assert!(third.piece_at(Square(3, 7)).is_some());
            }
            assert!(second.piece_at(Square(3, 7)).is_none());
        }
        assert!(first.piece_at(Square(3, 4)).is_none());
    }

    assert_eq!(game, snapshot);
}

#[test]
fn legality_queries_leave_no_trace() {
    let mut game = Game::new(Color::White);
    let snapshot = game.clone();

    for row in 0..8 {
        for col in 0..8 {
            for to_row in 0..8 {
                for to_col in 0..8 {
                    let _ = game.is_legal_move(Square(row, col), Square(to_row, to_col));
                }
            }
        }
    }

    assert_eq!(game, snapshot);
}

#[test]
fn checkmate_queries_leave_no_trace() {
    let mut game = GameBuilder::new()
        .piece(Square(0, 6), Color::Black, PieceKind::King)
        .piece(Square(1, 5), Color::Black, PieceKind::Pawn)
        .piece(Square(1, 6), Color::Black, PieceKind::Pawn)
        .piece(Square(1, 7), Color::Black, PieceKind::Pawn)
        .piece(Square(0, 4), Color::White, PieceKind::Rook)
        .piece(Square(7, 7), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build();
    let snapshot = game.clone();

    assert!(game.is_checkmate(Color::Black));
    assert!(!game.is_checkmate(Color::White));
    assert_eq!(game, snapshot);
}

#[test]
fn search_probes_unwind_through_pruning_breaks() {
    let mut game = Game::new(Color::White);
    game.commit_move(Square(6, 4), Square(4, 4));
    game.commit_move(Square(1, 3), Square(3, 3));
    let snapshot = game.clone();

    let mut nodes = 0u64;
    // Tight window forces immediate cutoffs on most branches
    let _ = game.minimax(2, true, -INFINITY, INFINITY, &mut nodes);
    let _ = game.minimax(2, true, -10, 10, &mut nodes);
    assert_eq!(game, snapshot);
}

#[test]
fn random_playout_with_interleaved_queries_stays_consistent() {
    let mut game = Game::new(Color::White);
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..40 {
        let color = game.turn();
        let moves = game.generate_moves(color);
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };

        // Probing queries must not disturb the position we commit from
        let snapshot = game.clone();
        let _ = game.is_king_in_danger(color);
        let _ = game.has_any_legal_move(color.opponent());
        assert!(game.is_legal_move(mv.from, mv.to));
        assert_eq!(game, snapshot);

        let result = game.commit(mv);
        if result.promoted {
            assert!(game.promote(mv.to, PieceKind::Queen));
        }
        assert_eq!(game.turn(), color.opponent());
    }

    // Kings survive any legal playout
    assert!(game.king_square(Color::White).is_some());
    assert!(game.king_square(Color::Black).is_some());
}
