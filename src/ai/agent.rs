use crate::game::{Board, Player};

/// Universal interface for move-selecting agents.
pub trait Agent {
    /// Choose a column for `to_move` on `board`. The board passed in is
    /// never mutated; agents that search work on their own copy.
    fn select_column(&mut self, board: &Board, to_move: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
