use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::constants::{
    COINS_PER_MOVE, DEFAULT_STARTING_LETTER, INITIAL_RETRIES, IQ_MAX, IQ_PER_MOVE,
    MAX_HINTS_PER_GAME, SCORE_PER_MOVE,
};
use crate::registry::normalize;

/// Logical game phase. Exactly one is active at a time; pausing is a runtime
/// flag on the engine and never changes the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    NameInput,
    Countdown,
    PlayerTurn,
    OpponentTurn,
    LoadingNextTurn,
    GameOver,
}

/// Whose move is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    #[default]
    User,
    Opponent,
}

impl PlayerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Opponent => "opponent",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session player statistics. Monotonically non-decreasing within a
/// session; reset to zero on a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub score: u32,
    pub coins: u32,
    pub iq: u32,
}

impl Stats {
    /// Apply the fixed reward for one accepted player move.
    pub fn apply_move(&mut self) {
        self.score += SCORE_PER_MOVE;
        self.coins += COINS_PER_MOVE;
        self.iq = (self.iq + IQ_PER_MOVE).min(IQ_MAX);
    }
}

/// Rank label for an IQ value, used by shells next to the IQ meter.
#[must_use]
pub const fn iq_level(iq: u32) -> &'static str {
    match iq {
        81.. => "Globetrotter",
        61..=80 => "Geo Genius",
        41..=60 => "Navigator",
        21..=40 => "Explorer",
        _ => "Newbie",
    }
}

/// Which personal best a record celebration is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Score,
    Streak,
    Iq,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Streak => "streak",
            Self::Iq => "iq",
        }
    }
}

/// Celebration surface currently blocking interaction, if any.
/// At most one is open at a time; a second trigger is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Record { kind: RecordKind, value: u32 },
    Milestone { wins: u32 },
}

/// Live state of one game session.
///
/// Created when the countdown completes, mutated only through the turn
/// engine's entry points, discarded on restart or exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub countdown_step: usize,
    /// Accepted place names in play order, append-only within a round.
    pub chain: Vec<String>,
    /// Normalized forms of everything accepted so far, for O(1) duplicate
    /// checks. Every chain entry, normalized, is present here.
    pub used: HashSet<String>,
    /// Required first letter (uppercase) for the next entry.
    pub expected_letter: char,
    pub current_player: PlayerKind,
    /// Counts down on rejected submissions; below zero ends the game.
    pub retries_left: i32,
    /// Fixed per-round hint budget, never replenished.
    pub hints_left: u32,
    pub stats: Stats,
    /// Consecutive accepted player moves since the last loss.
    pub streak: u32,
    pub game_over_message: Option<String>,
    pub player_won: bool,
    pub seed: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            phase: GamePhase::NameInput,
            countdown_step: 0,
            chain: Vec::new(),
            used: HashSet::new(),
            expected_letter: DEFAULT_STARTING_LETTER,
            current_player: PlayerKind::User,
            retries_left: INITIAL_RETRIES,
            hints_left: MAX_HINTS_PER_GAME,
            stats: Stats::default(),
            streak: 0,
            game_over_message: None,
            player_won: false,
            seed: 0,
        }
    }
}

impl GameSession {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Wipe all round-scoped values. Runs at countdown completion, not on
    /// the restart action itself.
    pub fn reset_round(&mut self) {
        self.chain.clear();
        self.used.clear();
        self.stats = Stats::default();
        self.streak = 0;
        self.retries_left = INITIAL_RETRIES;
        self.hints_left = MAX_HINTS_PER_GAME;
        self.expected_letter = DEFAULT_STARTING_LETTER;
        self.current_player = PlayerKind::User;
        self.game_over_message = None;
        self.player_won = false;
    }

    /// Append an accepted move and record its normalized form.
    pub fn record_move(&mut self, name: &str) {
        let trimmed = name.trim();
        self.used.insert(normalize(trimmed));
        self.chain.push(trimmed.to_string());
    }

    /// Normalized chain entries, the exclusion set for suggestions/hints.
    #[must_use]
    pub fn chain_exclusions(&self) -> HashSet<String> {
        self.chain.iter().map(|entry| normalize(entry)).collect()
    }

    /// Display name of the most recent accepted entry.
    #[must_use]
    pub fn last_played(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_move_keeps_used_superset_invariant() {
        let mut session = GameSession::default();
        session.record_move("  Spain ");
        session.record_move("Norway");
        assert_eq!(session.chain, vec!["Spain", "Norway"]);
        for entry in &session.chain {
            assert!(session.used.contains(&normalize(entry)));
        }
    }

    #[test]
    fn reset_round_restores_budgets_and_default_letter() {
        let mut session = GameSession::with_seed(5);
        session.record_move("Spain");
        session.stats.apply_move();
        session.streak = 4;
        session.retries_left = -1;
        session.hints_left = 0;
        session.expected_letter = 'N';
        session.game_over_message = Some("Time's up!".into());

        session.reset_round();
        assert!(session.chain.is_empty() && session.used.is_empty());
        assert_eq!(session.stats, Stats::default());
        assert_eq!(session.retries_left, INITIAL_RETRIES);
        assert_eq!(session.hints_left, MAX_HINTS_PER_GAME);
        assert_eq!(session.expected_letter, DEFAULT_STARTING_LETTER);
        assert_eq!(session.game_over_message, None);
        assert_eq!(session.seed, 5, "seed survives round resets");
    }

    #[test]
    fn stats_iq_clamps_at_max() {
        let mut stats = Stats {
            score: 0,
            coins: 0,
            iq: 99,
        };
        stats.apply_move();
        assert_eq!(stats.iq, IQ_MAX);
        stats.apply_move();
        assert_eq!(stats.iq, IQ_MAX);
    }

    #[test]
    fn iq_levels_cover_the_rank_boundaries() {
        assert_eq!(iq_level(0), "Newbie");
        assert_eq!(iq_level(21), "Explorer");
        assert_eq!(iq_level(41), "Navigator");
        assert_eq!(iq_level(61), "Geo Genius");
        assert_eq!(iq_level(81), "Globetrotter");
        assert_eq!(iq_level(100), "Globetrotter");
    }

    #[test]
    fn session_roundtrips_through_json() {
        let mut session = GameSession::with_seed(42);
        session.phase = GamePhase::PlayerTurn;
        session.record_move("Spain");
        session.stats.apply_move();
        let json = serde_json::to_string(&session).expect("serialize");
        let restored: GameSession = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, session);
    }
}
