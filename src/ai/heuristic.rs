use crate::game::{Board, Cell, Player, COLS, ROWS};

/// Trait for evaluating a non-terminal board position from a player's
/// perspective. Higher is better for that player.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic that scans all 4-cell windows and scores threats,
/// with a bonus for center-column control (the center participates in the
/// most possible winning lines).
///
/// Completed fours are never scored here; terminal boards are the search
/// layer's job.
pub struct WindowHeuristic;

const CENTER_COLUMN: usize = 3;
const CENTER_WEIGHT: i32 = 3;

impl WindowHeuristic {
    /// Score one 4-cell window given own and opponent piece counts.
    ///
    /// A window containing pieces of both players can never be completed
    /// by either side, so it contributes nothing. An unblocked 3 is one
    /// ply from winning, so its weight dominates the 2-piece cases.
    fn score_window(own: usize, opp: usize) -> i32 {
        if own > 0 && opp > 0 {
            return 0; // dead window
        }
        match (own, opp) {
            (3, 0) => 50,
            (2, 0) => 10,
            (0, 3) => -80,
            (0, 2) => -10,
            _ => 0,
        }
    }

    fn count_window(
        board: &Board,
        own: Cell,
        opp: Cell,
        cells: impl Iterator<Item = (usize, usize)>,
    ) -> i32 {
        let mut own_count = 0;
        let mut opp_count = 0;
        for (row, col) in cells {
            let cell = board.get(row, col);
            if cell == own {
                own_count += 1;
            } else if cell == opp {
                opp_count += 1;
            }
        }
        Self::score_window(own_count, opp_count)
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own = player.to_cell();
        let opp = player.other().to_cell();
        let mut score = 0;

        // Center column bonus
        for row in 0..ROWS {
            let cell = board.get(row, CENTER_COLUMN);
            if cell == own {
                score += CENTER_WEIGHT;
            } else if cell == opp {
                score -= CENTER_WEIGHT;
            }
        }

        // Scan all 4-cell windows

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += Self::count_window(board, own, opp, (0..4).map(|i| (row, col + i)));
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                score += Self::count_window(board, own, opp, (0..4).map(|i| (row + i, col)));
            }
        }

        // Diagonal rising (bottom-left to top-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += Self::count_window(board, own, opp, (0..4).map(|i| (row + i, col + i)));
            }
        }

        // Diagonal falling (top-left to bottom-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                score += Self::count_window(board, own, opp, (0..4).map(|i| (row - i, col + i)));
            }
        }

        score
    }
}
