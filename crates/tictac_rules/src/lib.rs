//! Tic-tac-toe round engine.
//!
//! Pure game logic with no rendering and no I/O:
//!
//! - **Board model**: [`Board`], [`Cell`], [`Mark`], [`Position`] and the
//!   eight winning [`Line`]s, evaluated by the functions in [`rules`].
//! - **Round engine**: [`Round::apply_move`] validates, applies and evaluates
//!   a move and returns a [`MoveOutcome`]. Invalid moves come back as
//!   [`MoveOutcome::Rejected`] and never mutate the round.
//! - **Opponent**: [`RandomOpponent`] picks a uniformly random empty cell.
//! - **Session**: [`Session`] wraps the current round, a [`RoundToken`] and
//!   the [`Scoreboard`].
//!
//! # Example
//!
//! ```
//! use tictac_rules::{Mark, MoveOutcome, Session};
//!
//! let mut session = Session::human_vs_human();
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(session.play(index), MoveOutcome::Continued);
//! }
//! let outcome = session.play(2);
//! assert!(matches!(outcome, MoveOutcome::Won { winner: Mark::X, .. }));
//! session.record_outcome(&outcome);
//! assert_eq!(*session.score().player_one(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod lines;
mod opponent;
mod outcome;
mod position;
mod round;
pub mod rules;
mod score;
mod session;
mod types;

pub use action::{Move, Rejection};
pub use lines::{Line, LineKind};
pub use opponent::{Opponent, RandomOpponent};
pub use outcome::{MoveOutcome, RoundStatus};
pub use position::Position;
pub use round::Round;
pub use score::{Mode, Scoreboard, Side};
pub use session::{RoundToken, Session};
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, Mark};
