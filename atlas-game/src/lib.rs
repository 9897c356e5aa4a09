//! AtlasPlay Game Engine
//!
//! Platform-agnostic core game logic for the AtlasPlay geography word-chain
//! game. This crate provides all game mechanics without UI or
//! platform-specific dependencies: the turn engine, the place dictionary, the
//! scripted opponent, and per-player progression records. Shells supply
//! persistence and identity through the [`RecordStore`] and
//! [`IdentityProvider`] traits and drive time by delivering countdown steps,
//! 1-second timer ticks, and opponent resolutions.

pub mod constants;
pub mod data;
pub mod engine;
pub mod event;
pub mod opponent;
pub mod player;
pub mod progress;
pub mod registry;
pub mod state;
pub mod store;
pub mod timer;

// Re-export commonly used types
pub use data::PlaceData;
pub use engine::{OpponentResolution, SubmitOutcome, TurnEngine};
pub use event::{GameEvent, MoveFailure, ShareOutcome};
pub use player::{IdentityProvider, MemoryIdentity};
pub use progress::ProgressTracker;
pub use registry::{PlaceRegistry, ValidationError, last_letter, normalize};
pub use state::{
    GamePhase, GameSession, Overlay, PlayerKind, RecordKind, Stats, iq_level,
};
pub use store::{MemoryStore, RecordStore, record_key};
pub use timer::{TickOutcome, TimerToken, TurnTimer};
