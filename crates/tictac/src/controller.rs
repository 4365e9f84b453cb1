//! Match controller: the session plus paced, cancellable follow-up actions.
//!
//! The controller runs on a virtual clock. Front ends call
//! [`MatchController::click`] for human input and
//! [`MatchController::advance`] as time passes; both return the [`Event`]s
//! to present. Delayed work (the computer's reply and the result notice) is
//! tagged with the current [`RoundToken`], so a restart makes it inert.

use crate::schedule::Scheduler;
use crate::settings::Timing;
use crate::sound::{SoundBoard, SoundCue};
use crate::strike::StrikeGeometry;
use std::time::Duration;
use tictac_rules::{
    Line, Mark, Mode, MoveOutcome, Opponent, Rejection, Round, RoundToken, Scoreboard, Session,
};
use tracing::{debug, info, instrument};

/// Work scheduled for later in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// The computer picks and plays a cell.
    ComputerMove,
    /// The round result is scored and announced.
    OutcomeNotice(MoveOutcome),
}

/// Kind of result notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NoticeKind {
    /// Someone won the round.
    #[display("winner")]
    Winner,
    /// The round was drawn.
    #[display("draw")]
    Draw,
}

/// Result notice shown at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Notice {
    /// Winner or draw.
    pub kind: NoticeKind,
    /// Text to display, e.g. `"CPU (O) WINS!"`.
    pub message: String,
}

/// Something the front end should present.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A mark was written to the board.
    Placed {
        /// Cell index.
        index: usize,
        /// Mark placed.
        mark: Mark,
        /// True if the computer made the move.
        by_computer: bool,
    },
    /// The last move completed a line.
    LineCompleted {
        /// The completed line.
        line: Line,
        /// Where to draw the strike.
        strike: StrikeGeometry,
    },
    /// Play a sound.
    Sound(SoundCue),
    /// Show the round result.
    Notice(Notice),
    /// Input was refused; nothing changed.
    Ignored(Rejection),
    /// A solo game is waiting for the human to pick a mark.
    AwaitingMarkChoice,
    /// A mark choice arrived outside the mark prompt; nothing changed.
    MarkChoiceClosed,
    /// A fresh round began.
    RoundStarted {
        /// Token of the new round.
        token: RoundToken,
        /// Mark that moves first.
        starting: Mark,
    },
}

/// Drives a [`Session`] with pacing, sound cues and the computer opponent.
#[derive(Debug)]
pub struct MatchController<O> {
    session: Session,
    scheduler: Scheduler<PendingAction>,
    opponent: O,
    timing: Timing,
    sound: SoundBoard,
    clock: Duration,
    awaiting_mark: bool,
    notice: Option<Notice>,
}

impl<O: Opponent> MatchController<O> {
    /// Creates a controller for `mode` starting at clock zero.
    #[instrument(skip(opponent))]
    pub fn new(mode: Mode, opponent: O, timing: Timing, sound: SoundBoard) -> Self {
        info!(?mode, "Starting match");
        Self {
            session: Session::new(mode),
            scheduler: Scheduler::new(),
            opponent,
            timing,
            sound,
            clock: Duration::ZERO,
            awaiting_mark: false,
            notice: None,
        }
    }

    /// Human input on cell `index`.
    ///
    /// In a solo game this always plays the human's mark, so clicks while
    /// the computer is to move are refused.
    #[instrument(skip(self), fields(token = %self.session.token()))]
    pub fn click(&mut self, index: usize) -> Vec<Event> {
        if self.awaiting_mark {
            debug!("Click ignored while awaiting mark choice");
            return vec![Event::AwaitingMarkChoice];
        }
        let mark = match self.session.mode() {
            Mode::HumanVsHuman => self.session.round().turn(),
            Mode::HumanVsComputer { human } => human,
        };
        self.place(index, mark, false)
    }

    /// Moves the clock forward by `elapsed` and fires everything now due.
    ///
    /// Actions scheduled by fired actions are fired too if they are already
    /// due, so a zero delay behaves like an immediate follow-up.
    #[instrument(skip(self), fields(token = %self.session.token()))]
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Event> {
        self.clock += elapsed;
        let mut events = Vec::new();
        loop {
            let due = self.scheduler.take_due(self.clock, self.session.token());
            if due.is_empty() {
                break;
            }
            for action in due {
                events.extend(self.fire(action));
            }
        }
        events
    }

    /// Starts a new round with the same scores.
    ///
    /// Pending computer moves and notices for the old round never fire.
    #[instrument(skip(self))]
    pub fn restart_round(&mut self) -> Vec<Event> {
        self.session.restart_round();
        self.round_started()
    }

    /// Zeroes the scores and starts a new round.
    ///
    /// A solo game then waits for [`MatchController::choose_mark`] before
    /// accepting clicks.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Vec<Event> {
        self.session.new_game();
        let mut events = self.round_started();
        if self.session.mode().computer_mark().is_some() {
            self.awaiting_mark = true;
            events.push(Event::AwaitingMarkChoice);
        }
        events
    }

    /// Solo play as `human`, starting a new game.
    ///
    /// Only honoured while the mark prompt is open, i.e. after
    /// [`MatchController::new_game`] in a solo game. Otherwise the scores
    /// and round are left alone.
    #[instrument(skip(self))]
    pub fn choose_mark(&mut self, human: Mark) -> Vec<Event> {
        if !self.awaiting_mark {
            debug!("Mark choice ignored outside the mark prompt");
            return vec![Event::MarkChoiceClosed];
        }
        self.awaiting_mark = false;
        self.session.choose_human_mark(human);
        self.round_started()
    }

    /// Two-human play, starting a new game.
    #[instrument(skip(self))]
    pub fn switch_to_duo(&mut self) -> Vec<Event> {
        self.awaiting_mark = false;
        self.session.switch_mode(Mode::HumanVsHuman);
        self.round_started()
    }

    /// Flips mute and returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.sound.toggle_mute()
    }

    /// Time until the next action for the current round is due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler
            .next_deadline(self.session.token())
            .map(|due| due.saturating_sub(self.clock))
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        self.session.round()
    }

    /// Returns the scoreboard.
    pub fn score(&self) -> &Scoreboard {
        self.session.score()
    }

    /// Notice for the current round, once it has fired.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns true while a solo game waits for a mark choice.
    pub fn is_awaiting_mark(&self) -> bool {
        self.awaiting_mark
    }

    /// Returns true if sound cues are muted.
    pub fn is_muted(&self) -> bool {
        self.sound.is_muted()
    }

    fn round_started(&mut self) -> Vec<Event> {
        let token = self.session.token();
        self.scheduler.discard_stale(token);
        self.notice = None;
        let starting = self.session.round().starting();
        info!(%token, ?starting, "Round started");
        vec![Event::RoundStarted { token, starting }]
    }

    fn place(&mut self, index: usize, mark: Mark, by_computer: bool) -> Vec<Event> {
        let outcome = self.session.apply_move(index, mark);
        if let MoveOutcome::Rejected(reason) = outcome {
            return vec![Event::Ignored(reason)];
        }

        let mut events = vec![Event::Placed {
            index,
            mark,
            by_computer,
        }];
        events.extend(self.sound.cue(SoundCue::Placement).map(Event::Sound));

        let token = self.session.token();
        match outcome {
            MoveOutcome::Won { line, .. } => {
                events.push(Event::LineCompleted {
                    line,
                    strike: StrikeGeometry::for_line(&line),
                });
                let due = self.clock + self.timing.win_notice();
                self.scheduler
                    .schedule(token, due, PendingAction::OutcomeNotice(outcome));
            }
            MoveOutcome::Drawn => {
                let due = self.clock + self.timing.draw_notice();
                self.scheduler
                    .schedule(token, due, PendingAction::OutcomeNotice(outcome));
            }
            MoveOutcome::Continued if self.session.computer_to_move() => {
                let due = self.clock + self.timing.computer_move();
                debug!(?due, "Computer move scheduled");
                self.scheduler
                    .schedule(token, due, PendingAction::ComputerMove);
            }
            MoveOutcome::Continued | MoveOutcome::Rejected(_) => {}
        }
        events
    }

    fn fire(&mut self, action: PendingAction) -> Vec<Event> {
        match action {
            PendingAction::ComputerMove => self.computer_move(),
            PendingAction::OutcomeNotice(outcome) => self.announce(outcome),
        }
    }

    fn computer_move(&mut self) -> Vec<Event> {
        let Some(mark) = self.session.mode().computer_mark() else {
            return Vec::new();
        };
        if !self.session.computer_to_move() {
            debug!("Computer move no longer applicable");
            return Vec::new();
        }
        match self.opponent.choose_move(self.session.round().board(), mark) {
            Some(index) => self.place(index, mark, true),
            None => Vec::new(),
        }
    }

    fn announce(&mut self, outcome: MoveOutcome) -> Vec<Event> {
        self.session.record_outcome(&outcome);
        let mode = self.session.mode();
        let (notice, cue) = match outcome {
            MoveOutcome::Won { winner, .. } => {
                let message = match mode {
                    Mode::HumanVsHuman => format!("{} is the Winner!", winner),
                    Mode::HumanVsComputer { human } if human == winner => {
                        format!("YOU ({}) WIN!", winner)
                    }
                    Mode::HumanVsComputer { .. } => format!("CPU ({}) WINS!", winner),
                };
                (Notice::new(NoticeKind::Winner, message), SoundCue::Victory)
            }
            MoveOutcome::Drawn => (
                Notice::new(NoticeKind::Draw, "DRAW".to_string()),
                SoundCue::GameOver,
            ),
            MoveOutcome::Continued | MoveOutcome::Rejected(_) => return Vec::new(),
        };

        info!(kind = %notice.kind, message = %notice.message, "Round result");
        let mut events: Vec<Event> = self.sound.cue(cue).map(Event::Sound).into_iter().collect();
        events.push(Event::Notice(notice.clone()));
        self.notice = Some(notice);
        events
    }
}
