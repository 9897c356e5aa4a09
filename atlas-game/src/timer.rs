//! Per-turn countdown as an explicit, cancellable handle.
//!
//! The engine owns exactly one `TurnTimer`. Starting it always invalidates
//! any previously issued token, so a driver still ticking an old interval
//! cannot advance the new countdown.

use serde::{Deserialize, Serialize};

use crate::constants::LOW_TIME_THRESHOLD;

/// Opaque handle identifying one timer run. Ticks carrying a stale token are
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

/// Result of delivering one 1-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a stale, stopped, or blocked timer.
    Ignored,
    Running {
        remaining: u32,
        /// True inside the warning window shells use for the hurry-up tick.
        low_time: bool,
    },
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct TurnTimer {
    generation: u64,
    running: bool,
    remaining: u32,
}

impl TurnTimer {
    /// Start (or restart) the countdown. Any prior token becomes stale.
    pub fn start(&mut self, duration: u32) -> TimerToken {
        self.generation += 1;
        self.running = true;
        self.remaining = duration;
        TimerToken(self.generation)
    }

    /// Stop ticking without resetting `remaining`.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Token of the currently running countdown, if any.
    #[must_use]
    pub const fn token(&self) -> Option<TimerToken> {
        if self.running {
            Some(TimerToken(self.generation))
        } else {
            None
        }
    }

    /// Deliver one second. Expiry stops the timer; the caller owns the
    /// resulting state transition.
    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        if !self.running || token.0 != self.generation {
            return TickOutcome::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Running {
            remaining: self.remaining,
            low_time: self.remaining <= LOW_TIME_THRESHOLD,
        }
    }
}
