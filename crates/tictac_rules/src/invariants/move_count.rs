//! Move count invariant: the counter matches the marks on the board.

use super::Invariant;
use crate::Round;

/// Invariant: `move_count` equals the number of occupied cells.
pub struct MoveCountInvariant;

impl Invariant<Round> for MoveCountInvariant {
    fn holds(round: &Round) -> bool {
        round.move_count() == round.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count equals occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_holds_after_replay() {
        let round = Round::replay(Mark::X, &[0, 4, 8]).unwrap();
        assert!(MoveCountInvariant::holds(&round));
        assert_eq!(round.move_count(), 3);
    }

    #[test]
    fn test_holds_for_seeded_board() {
        let round = Round::with_board(Board::parse("XO.......").unwrap(), Mark::X);
        assert!(MoveCountInvariant::holds(&round));
    }
}
