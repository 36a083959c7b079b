//! Legal move enumeration with capture-first ordering.

use super::state::Game;
use super::types::{Color, Move, MoveList, Square};

impl Game {
    /// Enumerate every legal move for `color`, captures first.
    ///
    /// Source and destination squares are scanned in raster order
    /// (row-major), and each candidate goes through the full legality
    /// check. A capture gets an ordering bonus of twice the captured
    /// piece's material value; the list is sorted by that bonus, highest
    /// first, with equal-bonus moves keeping raster order. The bonus is a
    /// pruning heuristic for the search, not a legality property.
    pub fn generate_moves(&mut self, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                if !self.piece_at(from).is_some_and(|p| p.color == color) {
                    continue;
                }
                for to_row in 0..8 {
                    for to_col in 0..8 {
                        let to = Square(to_row, to_col);
                        if !self.legal_move_for(color, from, to) {
                            continue;
                        }
                        let bonus = match self.piece_at(to) {
                            Some(target) => target.kind.value() * 2,
                            None => 0,
                        };
                        moves.push(Move::with_bonus(from, to, bonus));
                    }
                }
            }
        }

        moves.sort_by_bonus_desc();
        moves
    }
}
