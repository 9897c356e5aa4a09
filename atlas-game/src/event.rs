//! Discrete events the engine emits for the presentation shell.
//!
//! The engine appends events to an internal queue; shells drain it and decide
//! how (or whether) to render each one. Nothing in the core depends on the
//! queue being consumed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::{PlayerKind, RecordKind};

/// Expected game outcomes and recoverable faults, with their user-facing
/// message as the `Display` form.
///
/// The first three variants and the opponent-side equivalents drive normal
/// retry/game-over transitions; none of them is an exceptional fault.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum MoveFailure {
    #[error("Location must start with the letter '{expected}'.")]
    InvalidLetter { expected: char },
    #[error("'{name}' has already been used. Please try a different one.")]
    DuplicateLocation { name: String },
    #[error("{message}")]
    UnrecognizedPlace { message: String },
    #[error("Opponent couldn't find a valid location. You win!")]
    OpponentNoValidMove,
    #[error("Opponent made an invalid move (wrong letter: {name}). You win!")]
    OpponentInvalidMove { name: String },
    #[error("Opponent repeated a location ('{name}'). You win!")]
    OpponentDuplicateMove { name: String },
    #[error("Time's up!")]
    Timeout,
    #[error("{message}")]
    Transient { message: String },
}

impl MoveFailure {
    /// True for the outcomes that end the game in the player's favor.
    #[must_use]
    pub const fn is_player_win(&self) -> bool {
        matches!(
            self,
            Self::OpponentNoValidMove
                | Self::OpponentInvalidMove { .. }
                | Self::OpponentDuplicateMove { .. }
        )
    }
}

/// Event stream consumed by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum GameEvent {
    /// Name submission was empty; the session stays in name input.
    NameRequired,
    CountdownTick {
        step: usize,
        symbol: char,
    },
    /// A fresh round began; the player is on the clock.
    TurnStarted {
        letter: char,
    },
    MoveAccepted {
        name: String,
        by: PlayerKind,
        next_letter: char,
    },
    MoveRejected {
        failure: MoveFailure,
        retries_left: i32,
    },
    HintsReady {
        hints: Vec<String>,
        hints_left: u32,
    },
    /// The opponent turn was scheduled; the shell should call
    /// `resolve_opponent_turn` after roughly `delay_ms`.
    OpponentThinking {
        delay_ms: u64,
    },
    RecordAchieved {
        kind: RecordKind,
        value: u32,
    },
    MilestoneReached {
        wins: u32,
    },
    GameOver {
        message: String,
        player_won: bool,
    },
    OnlineChanged {
        online: bool,
    },
    Paused,
    Resumed,
    Restarted,
    Exited,
}

/// Typed result of a shell-side share attempt.
///
/// Sharing lives entirely in the presentation layer; this enum exists so
/// shells report the outcome without leaking platform error shapes into
/// engine logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum ShareOutcome {
    Success,
    Cancelled,
    PermissionDenied,
    Other { message: String },
}
