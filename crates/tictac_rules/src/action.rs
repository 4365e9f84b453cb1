//! First-class move and rejection types.
//!
//! Moves are domain events: they carry the acting mark and the cell index,
//! and are recorded in the round history in the order they were accepted.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

impl Move {
    /// Named position of this move, if the index is on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.mark, pos.label()),
            None => write!(f, "{} -> #{}", self.mark, self.index),
        }
    }
}

/// Reason a move was not applied.
///
/// Rejections leave the round untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The round already ended in a win or a draw.
    #[display("Round is already over")]
    RoundOver,

    /// The index is outside 0-8.
    #[display("Invalid index {} (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The acting mark is not the one to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for Rejection {}
