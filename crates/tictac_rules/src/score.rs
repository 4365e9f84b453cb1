//! Session scorekeeping across rounds.

use super::outcome::MoveOutcome;
use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which way a session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board; X always starts.
    HumanVsHuman,
    /// One human against the random opponent; the human always starts.
    HumanVsComputer {
        /// Mark chosen by the human.
        human: Mark,
    },
}

/// A scoring side.
///
/// Player one is X in a two-human session and the human against the
/// computer; player two is O or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First side.
    PlayerOne,
    /// Second side.
    PlayerTwo,
}

impl Mode {
    /// Mark that moves first in every round.
    pub fn starting_mark(&self) -> Mark {
        match self {
            Mode::HumanVsHuman => Mark::X,
            Mode::HumanVsComputer { human } => *human,
        }
    }

    /// Mark played by the computer, if any.
    pub fn computer_mark(&self) -> Option<Mark> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsComputer { human } => Some(human.opponent()),
        }
    }

    /// Returns true if `mark` is played by the computer.
    pub fn is_computer(&self, mark: Mark) -> bool {
        self.computer_mark() == Some(mark)
    }

    /// Side credited when `mark` wins.
    pub fn side_of(&self, mark: Mark) -> Side {
        let first = match self {
            Mode::HumanVsHuman => Mark::X,
            Mode::HumanVsComputer { human } => *human,
        };
        if mark == first {
            Side::PlayerOne
        } else {
            Side::PlayerTwo
        }
    }

    /// Mark played by `side`.
    pub fn mark_of(&self, side: Side) -> Mark {
        let first = self.starting_mark();
        match side {
            Side::PlayerOne => first,
            Side::PlayerTwo => first.opponent(),
        }
    }

    /// Scoreboard label for `side`, e.g. `"YOU (O)"` or `"PLAYER 2 (O)"`.
    pub fn label(&self, side: Side) -> String {
        let mark = self.mark_of(side);
        let name = match (self, side) {
            (Mode::HumanVsHuman, Side::PlayerOne) => "PLAYER 1",
            (Mode::HumanVsHuman, Side::PlayerTwo) => "PLAYER 2",
            (Mode::HumanVsComputer { .. }, Side::PlayerOne) => "YOU",
            (Mode::HumanVsComputer { .. }, Side::PlayerTwo) => "CPU",
        };
        format!("{name} ({mark})")
    }
}

/// Cumulative counters for a session.
///
/// Counters only grow until [`Scoreboard::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Wins credited to player one.
    player_one: u32,
    /// Wins credited to player two.
    player_two: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Creates an all-zero scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a terminal outcome; other outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &MoveOutcome, mode: &Mode) {
        match outcome {
            MoveOutcome::Won { winner, .. } => match mode.side_of(*winner) {
                Side::PlayerOne => self.player_one += 1,
                Side::PlayerTwo => self.player_two += 1,
            },
            MoveOutcome::Drawn => self.draws += 1,
            MoveOutcome::Continued | MoveOutcome::Rejected(_) => return,
        }
        debug!(
            player_one = self.player_one,
            player_two = self.player_two,
            draws = self.draws,
            "Score updated"
        );
    }

    /// Wins credited to `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::PlayerOne => self.player_one,
            Side::PlayerTwo => self.player_two,
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, Rejection};

    fn win(winner: Mark) -> MoveOutcome {
        MoveOutcome::Won {
            winner,
            line: Line::ALL[0],
        }
    }

    #[test]
    fn test_duo_maps_marks_to_sides() {
        let mode = Mode::HumanVsHuman;
        let mut score = Scoreboard::new();
        score.record(&win(Mark::X), &mode);
        score.record(&win(Mark::O), &mode);
        score.record(&win(Mark::O), &mode);
        assert_eq!(*score.player_one(), 1);
        assert_eq!(*score.player_two(), 2);
    }

    #[test]
    fn test_solo_maps_human_to_player_one() {
        let mode = Mode::HumanVsComputer { human: Mark::O };
        let mut score = Scoreboard::new();
        score.record(&win(Mark::O), &mode);
        score.record(&win(Mark::X), &mode);
        assert_eq!(score.wins(Side::PlayerOne), 1);
        assert_eq!(score.wins(Side::PlayerTwo), 1);
    }

    #[test]
    fn test_non_terminal_outcomes_ignored() {
        let mode = Mode::HumanVsHuman;
        let mut score = Scoreboard::new();
        score.record(&MoveOutcome::Continued, &mode);
        score.record(&MoveOutcome::Rejected(Rejection::RoundOver), &mode);
        score.record(&MoveOutcome::Drawn, &mode);
        assert_eq!(score, Scoreboard { player_one: 0, player_two: 0, draws: 1 });
    }

    #[test]
    fn test_labels() {
        let solo = Mode::HumanVsComputer { human: Mark::O };
        assert_eq!(solo.label(Side::PlayerOne), "YOU (O)");
        assert_eq!(solo.label(Side::PlayerTwo), "CPU (X)");
        assert_eq!(Mode::HumanVsHuman.label(Side::PlayerTwo), "PLAYER 2 (O)");
    }
}
