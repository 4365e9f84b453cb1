//! Line-oriented terminal driver.
//!
//! Reads one command per line, feeds it to a [`MatchController`] and prints
//! the resulting events. Between commands the driver sleeps until the next
//! scheduled action is due and advances the controller's clock by the real
//! time that passed.

use crate::controller::{Event, MatchController};
use crate::theme::{ThemePreference, ThemeStore};
use std::io::Write;
use std::time::Duration;
use tictac_rules::{Mark, Opponent, Position, Rejection, Side};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play a cell.
    Cell(usize),
    /// Restart the round, keeping scores.
    Restart,
    /// Zero the scores and restart.
    NewGame,
    /// Choose the human's mark in a solo game.
    Choose(Mark),
    /// Toggle sound cues.
    Mute,
    /// Advance to the next theme.
    Theme,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses a command line; returns `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let command = match line.to_ascii_lowercase().as_str() {
            "r" | "restart" => Self::Restart,
            "n" | "new" => Self::NewGame,
            "x" => Self::Choose(Mark::X),
            "o" => Self::Choose(Mark::O),
            "m" | "mute" => Self::Mute,
            "t" | "theme" => Self::Theme,
            "q" | "quit" => Self::Quit,
            _ => return Position::from_label_or_number(line).map(|p| Self::Cell(p.to_index())),
        };
        Some(command)
    }
}

const HELP: &str = "Commands: 0-8 or a cell name, r restart, n new game, x/o pick mark, m mute, t theme, q quit";

/// Runs the driver until `q` or end of input.
#[instrument(skip_all)]
pub async fn run<O, S, R, W>(
    controller: &mut MatchController<O>,
    theme: &mut ThemePreference<S>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    O: Opponent,
    S: ThemeStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut last = Instant::now();

    writeln!(out, "{}", HELP)?;
    writeln!(out, "Theme: {}", theme.theme())?;
    if controller.is_awaiting_mark() {
        writeln!(out, "Choose your mark: x or o")?;
    }
    writeln!(out, "{}", render(controller))?;

    loop {
        let wait = controller.time_until_next();
        if wait == Some(Duration::ZERO) {
            let events = tick(controller, &mut last);
            print_events(controller, &events, out)?;
            continue;
        }

        tokio::select! {
            biased;

            _ = tokio::time::sleep(wait.unwrap_or_default()), if wait.is_some() => {
                let events = tick(controller, &mut last);
                print_events(controller, &events, out)?;
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                let pending = tick(controller, &mut last);
                print_events(controller, &pending, out)?;

                let Some(command) = Input::parse(&line) else {
                    if !line.trim().is_empty() {
                        writeln!(out, "Unknown command: {}", line.trim())?;
                        writeln!(out, "{}", HELP)?;
                    }
                    continue;
                };
                debug!(?command, "Input");

                let events = match command {
                    Input::Quit => break,
                    Input::Cell(index) => controller.click(index),
                    Input::Restart => controller.restart_round(),
                    Input::NewGame => controller.new_game(),
                    Input::Choose(mark) => controller.choose_mark(mark),
                    Input::Mute => {
                        let muted = controller.toggle_mute();
                        writeln!(out, "Sound {}", if muted { "off" } else { "on" })?;
                        continue;
                    }
                    Input::Theme => {
                        match theme.toggle() {
                            Ok(next) => writeln!(out, "Theme: {}", next)?,
                            Err(e) => {
                                warn!(error = %e, "Failed to save theme");
                                writeln!(out, "Theme: {} (not saved)", theme.theme())?;
                            }
                        }
                        continue;
                    }
                };
                print_events(controller, &events, out)?;
            }
        }
    }

    info!(score = ?controller.score(), "Leaving");
    writeln!(out, "{}", scoreline(controller))?;
    Ok(())
}

fn tick<O: Opponent>(controller: &mut MatchController<O>, last: &mut Instant) -> Vec<Event> {
    let now = Instant::now();
    let events = controller.advance(now.duration_since(*last));
    *last = now;
    events
}

fn print_events<O: Opponent, W: Write>(
    controller: &MatchController<O>,
    events: &[Event],
    out: &mut W,
) -> std::io::Result<()> {
    let mut board_changed = false;
    for event in events {
        if matches!(event, Event::Placed { .. } | Event::RoundStarted { .. }) {
            board_changed = true;
        }
        writeln!(out, "{}", describe(event))?;
        if let Event::Notice(_) = event {
            writeln!(out, "{}", scoreline(controller))?;
        }
    }
    if board_changed {
        writeln!(out, "{}", render(controller))?;
    }
    out.flush()
}

/// One-line description of an event.
pub fn describe(event: &Event) -> String {
    match event {
        Event::Placed {
            index,
            mark,
            by_computer,
        } => {
            let who = if *by_computer { "CPU" } else { "Player" };
            let cell = Position::from_index(*index).map_or("?", |p| p.label());
            format!("{} placed {} at {} ({})", who, mark, index, cell)
        }
        Event::LineCompleted { line, .. } => format!("Line complete: {}", line),
        Event::Sound(cue) => format!("*{}*", cue.asset()),
        Event::Notice(notice) => notice.message.clone(),
        Event::Ignored(reason) => match reason {
            Rejection::RoundOver => "Round is over: r to restart, n for a new game".to_string(),
            other => format!("Ignored: {}", other),
        },
        Event::AwaitingMarkChoice => "Choose your mark: x or o".to_string(),
        Event::MarkChoiceClosed => "Marks are chosen at the start of a new game (n)".to_string(),
        Event::RoundStarted { token, starting } => {
            format!("New round ({}), {} starts", token, starting)
        }
    }
}

/// Board plus whose turn it is.
pub fn render<O: Opponent>(controller: &MatchController<O>) -> String {
    let round = controller.round();
    let status = if round.is_over() {
        "round over".to_string()
    } else {
        format!("{} to move", round.turn())
    };
    format!("{}\n{}", round.board().display(), status)
}

/// Scoreboard summary, e.g. `YOU (X) 2 | TIES 1 | CPU (O) 0`.
pub fn scoreline<O: Opponent>(controller: &MatchController<O>) -> String {
    let mode = controller.session().mode();
    let score = controller.score();
    format!(
        "{} {} | TIES {} | {} {}",
        mode.label(Side::PlayerOne),
        score.wins(Side::PlayerOne),
        score.draws(),
        mode.label(Side::PlayerTwo),
        score.wins(Side::PlayerTwo),
    )
}
