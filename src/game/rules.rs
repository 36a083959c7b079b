//! Move legality, check, and checkmate resolution.
//!
//! Legality is resolved in three layers:
//! - `attack_pattern`: raw per-piece movement plus path clearance, with no
//!   turn or check constraints. This is the primitive used for attack
//!   testing, which keeps `is_king_in_danger` non-recursive.
//! - `legal_move_for`: full legality for an explicit color, including the
//!   check-avoidance rule. The move generator uses this during search,
//!   where the probed grid does not carry a turn flag.
//! - `is_legal_move`: `legal_move_for` pinned to the side to move; the
//!   host-facing query.

use super::state::Game;
use super::types::{Color, PieceKind, Square};

impl Game {
    /// Is `from -> to` legal for the side to move?
    ///
    /// Applies the full rule set: a piece of the moving side on `from`, a
    /// destination that is not own-occupied, the piece's movement pattern
    /// with path clearance, and the check-avoidance rule (the move must not
    /// leave the mover's own king attacked).
    pub fn is_legal_move(&mut self, from: Square, to: Square) -> bool {
        let turn = self.turn;
        self.legal_move_for(turn, from, to)
    }

    /// Full legality for an explicit color, ignoring whose turn it is.
    pub(crate) fn legal_move_for(&mut self, color: Color, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some(piece) if piece.color == color => {}
            _ => return false,
        }
        if !self.attack_pattern(from, to) {
            return false;
        }
        !self.move_exposes_king(from, to, color)
    }

    /// Raw movement pattern test: piece movement rules and path clearance
    /// only. No turn constraint and no check-avoidance, so this is safe to
    /// call from `is_king_in_danger` without recursing.
    fn attack_pattern(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let target = self.piece_at(to);
        if target.is_some_and(|t| t.color == piece.color) {
            return false;
        }

        let dr = to.0 as isize - from.0 as isize;
        let dc = to.1 as isize - from.1 as isize;
        let abs_dr = dr.abs();
        let abs_dc = dc.abs();

        match piece.kind {
            PieceKind::Pawn => {
                let step = piece.color.pawn_step();
                if dc == 0 && dr == step && target.is_none() {
                    true
                } else if dc == 0
                    && dr == 2 * step
                    && from.0 == piece.color.pawn_start_row()
                    && target.is_none()
                {
                    // Two-step push: the square stepped over must be empty too
                    let over = Square((from.0 as isize + step) as usize, from.1);
                    self.piece_at(over).is_none()
                } else {
                    // Diagonal step only when capturing
                    abs_dc == 1 && dr == step && target.is_some()
                }
            }
            PieceKind::Rook => (dr == 0 || dc == 0) && self.path_clear(from, to),
            PieceKind::Bishop => abs_dr == abs_dc && self.path_clear(from, to),
            PieceKind::Queen => {
                (dr == 0 || dc == 0 || abs_dr == abs_dc) && self.path_clear(from, to)
            }
            PieceKind::King => abs_dr <= 1 && abs_dc <= 1,
            PieceKind::Knight => {
                (abs_dr == 2 && abs_dc == 1) || (abs_dr == 1 && abs_dc == 2)
            }
        }
    }

    /// Every square strictly between `from` and `to` must be empty.
    /// Assumes the two squares are aligned on a rank, file, or diagonal.
    fn path_clear(&self, from: Square, to: Square) -> bool {
        let row_step = (to.0 as isize - from.0 as isize).signum();
        let col_step = (to.1 as isize - from.1 as isize).signum();

        let mut row = from.0 as isize + row_step;
        let mut col = from.1 as isize + col_step;
        while (row, col) != (to.0 as isize, to.1 as isize) {
            if self.grid[row as usize][col as usize].is_some() {
                return false;
            }
            row += row_step;
            col += col_step;
        }
        true
    }

    /// Would executing `from -> to` leave `color`'s own king attacked?
    /// Evaluated on a probe so the grid is untouched afterwards.
    fn move_exposes_king(&mut self, from: Square, to: Square, color: Color) -> bool {
        let probe = self.probe(from, to);
        probe.is_king_in_danger(color)
    }

    /// Is `color`'s king currently attacked?
    ///
    /// True when any opposing piece has a movement pattern onto the king's
    /// square. A missing king reports no danger.
    #[must_use]
    pub fn is_king_in_danger(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        let enemy = color.opponent();

        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                if self.piece_at(from).is_some_and(|p| p.color == enemy)
                    && self.attack_pattern(from, king)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Does `color` have at least one fully legal move?
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                if !self.piece_at(from).is_some_and(|p| p.color == color) {
                    continue;
                }
                for to_row in 0..8 {
                    for to_col in 0..8 {
                        if self.legal_move_for(color, from, Square(to_row, to_col)) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Checkmate: the king is attacked and no legal move resolves it.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_king_in_danger(color) && !self.has_any_legal_move(color)
    }
}
