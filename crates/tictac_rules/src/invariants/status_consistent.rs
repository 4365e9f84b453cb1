//! Status invariant: the reported status matches the board.

use super::Invariant;
use crate::rules::{first_line, has_line, is_draw, is_full};
use crate::{Mark, Round, RoundStatus};

/// Invariant: `status` agrees with a fresh evaluation of the board.
///
/// - `InProgress`: no line held and at least one empty cell.
/// - `Won { winner, line }`: `line` is the first line held by `winner`.
/// - `Drawn`: full board, no line.
pub struct StatusConsistentInvariant;

impl Invariant<Round> for StatusConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        match round.status() {
            RoundStatus::InProgress => {
                !is_full(board) && !has_line(Mark::X, board) && !has_line(Mark::O, board)
            }
            RoundStatus::Won { winner, line } => first_line(winner, board) == Some(line),
            RoundStatus::Drawn => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Status matches board evaluation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_won_round() {
        let round = Round::replay(Mark::X, &[0, 3, 4, 5, 8]).unwrap();
        assert!(round.is_over());
        assert!(StatusConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_holds_for_drawn_round() {
        let round = Round::replay(Mark::X, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(round.status(), RoundStatus::Drawn);
        assert!(StatusConsistentInvariant::holds(&round));
    }
}
