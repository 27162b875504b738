use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, _to_move: Player) -> usize {
        let legal = board.legal_columns();
        assert!(!legal.is_empty(), "no legal columns available");
        legal[self.rng.random_range(0..legal.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
