//! Session: the current round plus cumulative scores.

use super::outcome::MoveOutcome;
use super::round::Round;
use super::score::{Mode, Scoreboard};
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Identity of the current round within a session.
///
/// Every restart or new game issues a fresh token, so work scheduled for an
/// older round can be recognised and dropped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("round#{}", _0)]
pub struct RoundToken(u64);

impl RoundToken {
    /// The token following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A sequence of rounds sharing one scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    mode: Mode,
    round: Round,
    token: RoundToken,
    score: Scoreboard,
}

impl Session {
    /// Creates a session in `mode` with an empty first round.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "Creating session");
        Self {
            mode,
            round: Round::new(mode.starting_mark()),
            token: RoundToken::default(),
            score: Scoreboard::new(),
        }
    }

    /// Two humans, X starts.
    pub fn human_vs_human() -> Self {
        Self::new(Mode::HumanVsHuman)
    }

    /// Human playing `human` against the computer; the human starts.
    pub fn human_vs_computer(human: Mark) -> Self {
        Self::new(Mode::HumanVsComputer { human })
    }

    /// Offers a move for `acting` at `index`.
    ///
    /// With two humans the mover is always the mark to move, so the turn
    /// check cannot fail. Against the computer `acting` is checked.
    #[instrument(skip(self), fields(token = %self.token))]
    pub fn apply_move(&mut self, index: usize, acting: Mark) -> MoveOutcome {
        let acting = match self.mode {
            Mode::HumanVsHuman => self.round.turn(),
            Mode::HumanVsComputer { .. } => acting,
        };
        self.round.apply_move(index, acting)
    }

    /// Plays `index` for the human whose turn it is.
    ///
    /// Against the computer this is always the human's mark, so it is
    /// rejected while the computer is to move.
    pub fn play(&mut self, index: usize) -> MoveOutcome {
        let acting = match self.mode {
            Mode::HumanVsHuman => self.round.turn(),
            Mode::HumanVsComputer { human } => human,
        };
        self.apply_move(index, acting)
    }

    /// Credits a terminal outcome to the scoreboard.
    pub fn record_outcome(&mut self, outcome: &MoveOutcome) {
        self.score.record(outcome, &self.mode);
    }

    /// Starts a fresh round, keeping the scores.
    #[instrument(skip(self), fields(token = %self.token))]
    pub fn restart_round(&mut self) -> &Round {
        self.round = Round::new(self.mode.starting_mark());
        self.token = self.token.next();
        debug!(token = %self.token, starting = ?self.round.starting(), "Round restarted");
        &self.round
    }

    /// Zeroes the scores and starts a fresh round.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> &Round {
        self.score.reset();
        info!("New game");
        self.restart_round()
    }

    /// Switches mode, which also starts a new game.
    #[instrument(skip(self))]
    pub fn switch_mode(&mut self, mode: Mode) -> &Round {
        self.mode = mode;
        self.new_game()
    }

    /// Plays the computer as `human.opponent()` and starts a new game.
    pub fn choose_human_mark(&mut self, human: Mark) -> &Round {
        self.switch_mode(Mode::HumanVsComputer { human })
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current round token.
    pub fn token(&self) -> RoundToken {
        self.token
    }

    /// Returns the scoreboard.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// Returns true if the computer is to move in an unfinished round.
    pub fn computer_to_move(&self) -> bool {
        !self.round.is_over() && self.mode.is_computer(self.round.turn())
    }
}
