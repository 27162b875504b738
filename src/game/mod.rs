//! Core Connect Four game logic: board representation, the move applier,
//! player types, and the game session the presentation layer drives.

mod board;
pub mod moves;
mod player;
mod session;

pub use board::{Board, Cell, GameOutcome, COLS, CONNECT, ROWS};
pub use player::{Player, SideControl};
pub use session::{GameSession, MoveResult, SessionConfig};

#[cfg(test)]
pub(crate) use board::board_from_rows;
