//! Adversarial search: minimax with alpha-beta pruning.
//!
//! The search explores moves through the probe guard, so every
//! speculative application is undone on scope exit, including early
//! pruning breaks. The chosen move is committed through the public
//! mutator exactly once, at the very end.

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Game;
use super::types::{Color, Move, MoveResult};

/// Score sentinel comfortably above any evaluation sum.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Search depth presets for the automated opponent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Search depth in plies for this difficulty.
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
            Difficulty::Extreme => 6,
        }
    }
}

impl From<&str> for Difficulty {
    /// Map a host-supplied level string; anything unrecognized is Extreme.
    fn from(level: &str) -> Self {
        match level {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Extreme,
        }
    }
}

/// Process-wide difficulty, read at search time. Mutable between games.
static CURRENT_DIFFICULTY: Mutex<Difficulty> = Mutex::new(Difficulty::Easy);

/// Set the difficulty for subsequent automated moves.
pub fn set_difficulty(difficulty: Difficulty) {
    *CURRENT_DIFFICULTY.lock() = difficulty;
}

/// The difficulty currently in effect.
#[must_use]
pub fn difficulty() -> Difficulty {
    *CURRENT_DIFFICULTY.lock()
}

/// A move chosen and committed by the search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchOutcome {
    /// The committed move.
    pub mv: Move,
    /// The result of committing it (capture, promotion flag).
    pub result: MoveResult,
}

/// Choose and commit the best move for the side to move, searching to the
/// depth of the process-wide difficulty.
///
/// Returns `None`, without side effects, exactly when the side to move has
/// no legal move; the caller is expected to have already distinguished
/// checkmate from stalemate via `is_checkmate`.
pub fn choose_move(game: &mut Game) -> Option<SearchOutcome> {
    choose_move_with_depth(game, difficulty().depth())
}

/// Choose and commit the best move for the side to move at an explicit
/// search depth.
///
/// White picks the maximum score, Black the minimum; each root move's
/// score is its minimax value plus its own ordering bonus. Ties keep the
/// earliest move in generation order, so the result is deterministic for
/// a given position and depth.
pub fn choose_move_with_depth(game: &mut Game, depth: u32) -> Option<SearchOutcome> {
    #[cfg(feature = "logging")]
    let started = std::time::Instant::now();

    let color = game.turn();
    let moves = game.generate_moves(color);

    let mut nodes = 0u64;
    let mut best: Option<(Move, i32)> = None;

    for mv in &moves {
        let value = {
            let mut probe = game.probe(mv.from, mv.to);
            probe.minimax(
                depth.saturating_sub(1),
                color == Color::Black,
                -INFINITY,
                INFINITY,
                &mut nodes,
            )
        } + mv.bonus;

        let improved = match best {
            None => true,
            Some((_, best_value)) => match color {
                Color::White => value > best_value,
                Color::Black => value < best_value,
            },
        };
        if improved {
            best = Some((*mv, value));
        }
    }

    let (mv, _value) = best?;
    let result = game.commit(mv);

    #[cfg(feature = "logging")]
    log::debug!(
        "search: depth {depth} chose {mv} score {_value} ({nodes} nodes in {:?})",
        started.elapsed()
    );

    Some(SearchOutcome { mv, result })
}

impl Game {
    /// Depth-limited minimax over probe guards.
    ///
    /// `maximizing` implies the side to generate for: White maximizes,
    /// Black minimizes. A side with no moves yields the fold identity
    /// (-INFINITY when maximizing, +INFINITY otherwise), which the king's
    /// material value already dominates in practice.
    pub(crate) fn minimax(
        &mut self,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 {
            return self.evaluate();
        }

        let color = if maximizing {
            Color::White
        } else {
            Color::Black
        };
        let moves = self.generate_moves(color);

        if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                let score = {
                    let mut probe = self.probe(mv.from, mv.to);
                    probe.minimax(depth - 1, false, alpha, beta, nodes)
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let score = {
                    let mut probe = self.probe(mv.from, mv.to);
                    probe.minimax(depth - 1, true, alpha, beta, nodes)
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
