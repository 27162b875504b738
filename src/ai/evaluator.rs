use crate::game::{Board, Cell, Player, COLS, CONNECT, ROWS};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    /// Static score of `board` for `side`; higher is better for `side`.
    fn evaluate(&self, board: &Board, side: Player) -> i32;
}

/// Default heuristic: every length-4 window in all four directions
/// contributes the signed count of its tokens, with near-complete
/// alignments amplified. Position-only, no lookahead; only ever invoked at
/// search leaves.
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Signed token count of one window: +1 per own token, -1 per opponent
    /// token. A sum of exactly 2 is doubled and a sum of exactly 3
    /// multiplied by 5, so near-complete alignments dominate scattered
    /// single tokens.
    fn window_score(cells: [Cell; CONNECT], side: Player) -> i32 {
        let mut score = 0;
        for cell in cells {
            match cell.owner() {
                Some(owner) if owner == side => score += 1,
                Some(_) => score -= 1,
                None => {}
            }
        }

        match score {
            2 => score * 2,
            3 => score * 5,
            _ => score,
        }
    }

    /// Sum of window scores for `side` over rows, columns and both
    /// diagonals.
    fn line_score(board: &Board, side: Player) -> i32 {
        let mut score = 0;

        // Rows
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                let cells = std::array::from_fn(|i| board.get(row, col + i));
                score += Self::window_score(cells, side);
            }
        }

        // Columns
        for col in 0..COLS {
            for row in 0..=ROWS - CONNECT {
                let cells = std::array::from_fn(|i| board.get(row + i, col));
                score += Self::window_score(cells, side);
            }
        }

        // Diagonals, top-left to bottom-right
        for row in 0..=ROWS - CONNECT {
            for col in 0..=COLS - CONNECT {
                let cells = std::array::from_fn(|i| board.get(row + i, col + i));
                score += Self::window_score(cells, side);
            }
        }

        // Diagonals, top-right to bottom-left
        for row in 0..=ROWS - CONNECT {
            for col in CONNECT - 1..COLS {
                let cells = std::array::from_fn(|i| board.get(row + i, col - i));
                score += Self::window_score(cells, side);
            }
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, side: Player) -> i32 {
        Self::line_score(board, side) - Self::line_score(board, side.other())
    }
}
