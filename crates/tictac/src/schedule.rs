//! Delayed actions keyed by round token.
//!
//! Every action is tagged with the [`RoundToken`] that was current when it
//! was scheduled. Actions for any other token are discarded instead of
//! fired, so a restart makes all pending work for the old round inert.

use std::time::Duration;
use tictac_rules::RoundToken;
use tracing::debug;

#[derive(Debug, Clone)]
struct Pending<A> {
    token: RoundToken,
    due: Duration,
    seq: u64,
    action: A,
}

/// Queue of actions due at points on a virtual clock.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    pending: Vec<Pending<A>>,
    next_seq: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<A> Scheduler<A> {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` for `token` at clock time `due`.
    pub fn schedule(&mut self, token: RoundToken, due: Duration, action: A) {
        self.pending.push(Pending {
            token,
            due,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Removes and returns actions for `current` due at or before `now`.
    ///
    /// Actions come back in deadline order, ties in scheduling order.
    /// Actions for other tokens are dropped.
    pub fn take_due(&mut self, now: Duration, current: RoundToken) -> Vec<A> {
        self.discard_stale(current);

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.action).collect()
    }

    /// Earliest deadline among actions for `current`.
    pub fn next_deadline(&self, current: RoundToken) -> Option<Duration> {
        self.pending
            .iter()
            .filter(|p| p.token == current)
            .map(|p| p.due)
            .min()
    }

    /// Drops every action not scheduled for `current`.
    pub fn discard_stale(&mut self, current: RoundToken) {
        let before = self.pending.len();
        self.pending.retain(|p| p.token == current);
        let dropped = before - self.pending.len();
        if dropped > 0 {
            debug!(dropped, token = %current, "Discarded stale actions");
        }
    }

    /// Number of queued actions, stale ones included.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
