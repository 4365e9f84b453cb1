//! Round engine: one playthrough from an empty board to a terminal status.

use super::action::{Move, Rejection};
use super::invariants::{InvariantSet, RoundInvariants};
use super::outcome::{MoveOutcome, RoundStatus};
use super::rules::{first_line, is_full};
use super::types::{Board, CELL_COUNT, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single round of tic-tac-toe.
///
/// The round is mutated only through [`Round::apply_move`], which validates
/// the move, writes it, and evaluates win before draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    turn: Mark,
    starting: Mark,
    status: RoundStatus,
    move_count: usize,
    history: Vec<Move>,
}

impl Round {
    /// Creates an empty round with `starting` to move.
    #[instrument]
    pub fn new(starting: Mark) -> Self {
        Self {
            board: Board::new(),
            turn: starting,
            starting,
            status: RoundStatus::InProgress,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Seeds a round from an existing board with `turn` to move.
    ///
    /// The status is evaluated from the board: the mark that moved last
    /// (`turn.opponent()`) is checked for a line first, then `turn`.
    #[instrument(skip(board))]
    pub fn with_board(board: Board, turn: Mark) -> Self {
        let status = evaluate(&board, turn.opponent())
            .or_else(|| evaluate(&board, turn))
            .unwrap_or(if is_full(&board) {
                RoundStatus::Drawn
            } else {
                RoundStatus::InProgress
            });
        let move_count = board.occupied_count();

        Self {
            board,
            turn,
            starting: turn,
            status,
            move_count,
            history: Vec::new(),
        }
    }

    /// Replays `indices` from an empty round, alternating from `starting`.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] met while replaying.
    #[instrument]
    pub fn replay(starting: Mark, indices: &[usize]) -> Result<Self, Rejection> {
        let mut round = Self::new(starting);
        for &index in indices {
            let mark = round.turn;
            if let MoveOutcome::Rejected(reason) = round.apply_move(index, mark) {
                return Err(reason);
            }
        }
        Ok(round)
    }

    /// Offers a move for `acting` at `index`.
    ///
    /// Checks run in a fixed order and each failure is a distinct
    /// [`Rejection`]: round over, index out of range, cell occupied,
    /// wrong mark. A rejected move changes nothing.
    #[instrument(skip(self), fields(turn = ?self.turn, moves = self.move_count))]
    pub fn apply_move(&mut self, index: usize, acting: Mark) -> MoveOutcome {
        if let Err(reason) = self.check(index, acting) {
            debug!(%reason, "Move rejected");
            return MoveOutcome::Rejected(reason);
        }

        self.board.place(index, acting);
        self.move_count += 1;
        self.history.push(Move::new(acting, index));

        // Win is decided before a full board can count as a draw.
        self.status = if let Some(line) = first_line(acting, &self.board) {
            RoundStatus::Won {
                winner: acting,
                line,
            }
        } else if is_full(&self.board) {
            RoundStatus::Drawn
        } else {
            self.turn = acting.opponent();
            RoundStatus::InProgress
        };

        debug_assert!(
            RoundInvariants::check_all(self).is_ok(),
            "round invariants violated after {index}"
        );

        let outcome = MoveOutcome::from(self.status);
        debug!(index, mark = ?acting, %outcome, "Move applied");
        outcome
    }

    fn check(&self, index: usize, acting: Mark) -> Result<(), Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::RoundOver);
        }
        if index >= CELL_COUNT {
            return Err(Rejection::InvalidIndex(index));
        }
        if !self.board.is_empty_at(index) {
            return Err(Rejection::CellOccupied(index));
        }
        if acting != self.turn {
            return Err(Rejection::NotYourTurn(acting));
        }
        Ok(())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move (or the mark that made the final move once terminal).
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Mark that moved first.
    pub fn starting(&self) -> Mark {
        self.starting
    }

    /// Current status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Winning line, if the round was won.
    pub fn winning_line(&self) -> Option<super::lines::Line> {
        self.status.winning_line()
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Moves accepted by this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

fn evaluate(board: &Board, mark: Mark) -> Option<RoundStatus> {
    first_line(mark, board).map(|line| RoundStatus::Won { winner: mark, line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::Line;

    #[test]
    fn test_first_move() {
        let mut round = Round::new(Mark::X);
        assert_eq!(round.apply_move(4, Mark::X), MoveOutcome::Continued);
        assert_eq!(round.turn(), Mark::O);
        assert_eq!(round.move_count(), 1);
        assert_eq!(round.history(), &[Move::new(Mark::X, 4)]);
    }

    #[test]
    fn test_rejections_in_order() {
        let mut round = Round::new(Mark::X);
        assert_eq!(
            round.apply_move(9, Mark::O),
            MoveOutcome::Rejected(Rejection::InvalidIndex(9))
        );
        round.apply_move(0, Mark::X);
        // Occupied is reported before the wrong mark.
        assert_eq!(
            round.apply_move(0, Mark::X),
            MoveOutcome::Rejected(Rejection::CellOccupied(0))
        );
        assert_eq!(
            round.apply_move(1, Mark::X),
            MoveOutcome::Rejected(Rejection::NotYourTurn(Mark::X))
        );
    }

    #[test]
    fn test_round_over_checked_first() {
        let mut round = Round::replay(Mark::X, &[0, 3, 1, 4, 2]).unwrap();
        assert!(round.is_over());
        assert_eq!(
            round.apply_move(42, Mark::O),
            MoveOutcome::Rejected(Rejection::RoundOver)
        );
    }

    #[test]
    fn test_won_status_keeps_turn() {
        let round = Round::replay(Mark::X, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            round.status(),
            RoundStatus::Won {
                winner: Mark::X,
                line: Line::ALL[0]
            }
        );
        assert_eq!(round.turn(), Mark::X);
    }

    #[test]
    fn test_with_board_evaluates_status() {
        let board = Board::parse("XOXXOOOXX").unwrap();
        let round = Round::with_board(board, Mark::O);
        assert_eq!(round.status(), RoundStatus::Drawn);
        assert_eq!(round.move_count(), 9);

        let round = Round::with_board(Board::parse("XX.OO....").unwrap(), Mark::X);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.move_count(), 4);
    }

    #[test]
    fn test_replay_reports_first_rejection() {
        assert_eq!(
            Round::replay(Mark::X, &[4, 4]),
            Err(Rejection::CellOccupied(4))
        );
    }
}
