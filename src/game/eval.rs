//! Board evaluation: material, centralization, and a check bonus.

use once_cell::sync::Lazy;

use super::state::Game;

/// Center weights by distance from the row/column edges. Index 0 is an
/// edge rank/file, index 3 the two center ranks/files.
const EDGE_RAMP: [[i32; 4]; 4] = [
    [0, 0, 0, 0],
    [2, 2, 2, 2],
    [2, 3, 4, 4],
    [3, 4, 6, 6],
];

/// Positional bonus per square, 0 on the end ranks rising to 6 in the
/// center. Color-independent: both sides read it by their piece's own
/// (row, col). Mirrored out of the quarter table above.
static CENTER_WEIGHTS: Lazy<[[i32; 8]; 8]> = Lazy::new(|| {
    let mut weights = [[0i32; 8]; 8];
    for (row, rank) in weights.iter_mut().enumerate() {
        for (col, square) in rank.iter_mut().enumerate() {
            let row_edge_dist = row.min(7 - row);
            let col_edge_dist = col.min(7 - col);
            *square = EDGE_RAMP[row_edge_dist][col_edge_dist];
        }
    }
    weights
});

/// Flat bonus added to each piece of a side that currently gives check.
const CHECK_BONUS: i32 = 15;

impl Game {
    /// Score the position, positive favoring White.
    ///
    /// Each piece contributes its material value plus the center weight of
    /// its square. The opponent-in-check condition is queried once per
    /// piece, so a side giving check collects the bonus once for every
    /// piece it has on the board.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;

        for row in 0..8 {
            for col in 0..8 {
                let Some(piece) = self.grid[row][col] else {
                    continue;
                };

                let mut value = piece.kind.value() + CENTER_WEIGHTS[row][col];
                if self.is_king_in_danger(piece.color.opponent()) {
                    value += CHECK_BONUS;
                }

                score += piece.color.sign() * value;
            }
        }

        score
    }
}
