//! Draw detection logic for tic-tac-toe.

use super::win::has_line;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Checks if the board is full (no empty cell).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A draw is a full board where neither mark holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_line(Mark::X, board) && !has_line(Mark::O, board)
}
