//! Round status and move outcomes.

use super::action::Rejection;
use super::lines::Line;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are still accepted.
    InProgress,
    /// `winner` holds `line`.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// First completed line in table order.
        line: Line,
    },
    /// Board is full with no line.
    Drawn,
}

impl RoundStatus {
    /// Returns true once the round accepts no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            RoundStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            RoundStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result of offering a move to the round engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move accepted; the other mark is now to move.
    Continued,
    /// Move accepted and completed `line`.
    Won {
        /// Mark that won.
        winner: Mark,
        /// First completed line in table order.
        line: Line,
    },
    /// Move accepted and filled the board without a line.
    Drawn,
    /// Move refused; nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Returns true if the move ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Drawn)
    }
}

impl From<RoundStatus> for MoveOutcome {
    fn from(status: RoundStatus) -> Self {
        match status {
            RoundStatus::InProgress => MoveOutcome::Continued,
            RoundStatus::Won { winner, line } => MoveOutcome::Won { winner, line },
            RoundStatus::Drawn => MoveOutcome::Drawn,
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Continued => write!(f, "Continued"),
            MoveOutcome::Won { winner, line } => write!(f, "{winner} wins on {line}"),
            MoveOutcome::Drawn => write!(f, "Draw"),
            MoveOutcome::Rejected(reason) => write!(f, "Rejected: {reason}"),
        }
    }
}
