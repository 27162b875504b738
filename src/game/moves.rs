//! The move applier: the only path through which moves are committed or
//! taken back. Validates before touching the board, so a rejected move
//! leaves no trace.

use crate::error::MoveError;

use super::board::{Board, COLS};
use super::player::Player;

/// Drop `side`'s token into `column`, returning the landing row.
///
/// Fails with [`MoveError::InvalidColumn`] or [`MoveError::ColumnFull`]
/// without mutating the board; on success performs exactly one placement.
pub fn apply(board: &mut Board, column: usize, side: Player) -> Result<usize, MoveError> {
    if column >= COLS {
        return Err(MoveError::InvalidColumn(column));
    }
    let row = board
        .drop_position(column)
        .ok_or(MoveError::ColumnFull(column))?;
    board.place(column, row, side);
    Ok(row)
}

/// Take back the token placed at (column, row).
///
/// Every `apply` must be paired with exactly one `undo` along every
/// recursive search path, including early returns; an unpaired apply
/// corrupts all sibling branches.
pub fn undo(board: &mut Board, column: usize, row: usize) {
    board.remove(column, row);
}
