//! Alternating turn invariant: marks alternate from the starting mark.

use super::Invariant;
use crate::Round;

/// Invariant: accepted moves alternate, beginning with the starting mark.
///
/// While the round is in progress the mark to move is the opponent of the
/// last mover; once terminal it stays on the mark that ended the round.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        let Some(last) = history.last() else {
            return round.turn() == round.starting();
        };

        if history[0].mark != round.starting() {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if round.is_over() {
            round.turn() == last.mark
        } else {
            round.turn() == last.mark.opponent()
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns from the starting mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, MoveOutcome};

    #[test]
    fn test_empty_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&Round::new(Mark::O)));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let round = Round::replay(Mark::O, &[0, 4, 8, 2, 6]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&round));
        let marks: Vec<_> = round.history().iter().map(|m| m.mark).collect();
        assert_eq!(marks, vec![Mark::O, Mark::X, Mark::O, Mark::X, Mark::O]);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut round = Round::new(Mark::X);
        round.apply_move(4, Mark::X);
        assert!(matches!(round.apply_move(4, Mark::O), MoveOutcome::Rejected(_)));
        assert_eq!(round.turn(), Mark::O);
        assert!(AlternatingTurnInvariant::holds(&round));
    }
}
