use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, GameOutcome, Player, COLS};

use super::agent::Agent;
use super::evaluator::{Heuristic, WindowHeuristic};

/// Score for a line completed during search. Far outside the range any
/// static evaluation can reach, so a found win always dominates leaf
/// scores.
const WIN_SCORE: i32 = 1_000_000;

/// Default maximum search depth in plies.
pub const DEFAULT_DEPTH: usize = 8;

/// Search engine tuning, loadable from the `[search]` config table.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum search depth in plies.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Depth-limited minimax agent with alpha-beta pruning.
///
/// The search mutates a private copy of the board in place and reverts
/// every trial move on the way back up; it never commits to the caller's
/// board. The automated side is always the maximizer.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Choose a column for `side` to play on `board`.
    ///
    /// If no column strictly improved the initial bound (the search opened
    /// on a terminal position, or the depth is zero) this degrades to a
    /// uniformly random legal column instead of failing. A board with no
    /// legal column at all is a caller contract violation.
    pub fn take_turn(&mut self, board: &Board, side: Player) -> usize {
        let mut scratch = *board;
        let (_, best) = self.minimax(&mut scratch, side, self.depth, true, i32::MIN, i32::MAX);
        debug_assert_eq!(scratch, *board, "search left a trial move on the board");

        match best {
            Some(column) => column,
            None => {
                let legal = board.legal_columns();
                assert!(!legal.is_empty(), "no legal columns available");
                legal[self.rng.random_range(0..legal.len())]
            }
        }
    }

    /// Returns the node score and the best column, `None` when the node is
    /// a leaf or no column strictly improved the incoming bound.
    fn minimax(
        &self,
        board: &mut Board,
        side: Player,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<usize>) {
        if depth == 0 || board.winner() != GameOutcome::Ongoing {
            return (self.heuristic.evaluate(board, side), None);
        }

        let mover = if maximizing { side } else { side.other() };
        let mut best = None;

        for column in 0..COLS {
            let row = match board.drop_position(column) {
                Some(row) => row,
                None => continue,
            };
            board.place(column, row, mover);

            // A placement that wins on the spot short-circuits the rest of
            // the node; nothing deeper can outweigh it.
            if board.check_win(row, column) {
                board.remove(column, row);
                let score = if maximizing { WIN_SCORE } else { -WIN_SCORE };
                return (score, Some(column));
            }

            let (score, _) = self.minimax(board, side, depth - 1, !maximizing, alpha, beta);
            board.remove(column, row);

            // Strict improvement only, so ties keep the leftmost column.
            if maximizing && score > alpha {
                alpha = score;
                best = Some((score, column));
            } else if !maximizing && score < beta {
                beta = score;
                best = Some((score, column));
            }
            if alpha >= beta {
                break;
            }
        }

        match best {
            Some((score, column)) => (score, Some(column)),
            None => (if maximizing { alpha } else { beta }, None),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, board: &Board, to_move: Player) -> usize {
        self.take_turn(board, to_move)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
