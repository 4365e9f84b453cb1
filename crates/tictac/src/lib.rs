//! Tic-tac-toe match driver.
//!
//! Builds on [`tictac_rules`] with everything needed to actually play:
//!
//! - **Controller**: paced, cancellable computer replies and result notices
//! - **Schedule**: delayed actions keyed by round token
//! - **Sound**: cue events with mute
//! - **Theme**: persisted light/dark/colorful preference
//! - **Settings**: TOML settings with defaults
//! - **Terminal**: a line-oriented driver
//!
//! # Example
//!
//! ```
//! use tictac::{Event, MatchController, SoundBoard, Timing};
//! use tictac_rules::{Mark, Mode, RandomOpponent};
//! use std::time::Duration;
//!
//! let mut game = MatchController::new(
//!     Mode::HumanVsComputer { human: Mark::X },
//!     RandomOpponent::from_seed(1),
//!     Timing::default(),
//!     SoundBoard::new(true),
//! );
//! game.click(4);
//! let events = game.advance(Duration::from_millis(500));
//! assert!(matches!(events[0], Event::Placed { by_computer: true, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod controller;
mod error;
mod schedule;
mod settings;
mod sound;
mod strike;
mod terminal;
mod theme;

pub use cli::{Cli, Command, MarkArg};
pub use controller::{Event, MatchController, Notice, NoticeKind, PendingAction};
pub use error::{ConfigError, ThemeStoreError};
pub use schedule::Scheduler;
pub use settings::{Settings, Timing};
pub use sound::{SoundBoard, SoundCue};
pub use strike::{STRIKES, StrikeGeometry};
pub use terminal::{Input, describe, render, run, scoreline};
pub use theme::{FileThemeStore, MemoryThemeStore, THEME_KEY, Theme, ThemePreference, ThemeStore};
