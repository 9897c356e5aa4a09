//! Centralized tuning constants for AtlasPlay game logic.
//!
//! These values define the deterministic rules of the word chain. Keeping
//! them together ensures gameplay can only be adjusted via code changes
//! reviewed in version control.

// Round pacing -------------------------------------------------------------
pub const COUNTDOWN_SEQUENCE: [char; 5] = ['A', 'T', 'L', 'A', 'S'];
pub const COUNTDOWN_STEP_MS: u64 = 700;
/// Per-turn countdown in seconds.
pub const PLAYER_TURN_DURATION: u32 = 15;
/// Remaining seconds at or below which shells should surface a warning tick.
pub const LOW_TIME_THRESHOLD: u32 = 5;
/// Opponent simulated thinking delay bounds, milliseconds.
pub const OPPONENT_THINK_MIN_MS: u64 = 1_000;
pub const OPPONENT_THINK_MAX_MS: u64 = 2_000;

// Turn budgets -------------------------------------------------------------
pub const INITIAL_RETRIES: i32 = 1;
pub const MAX_HINTS_PER_GAME: u32 = 5;
pub const HINTS_PER_REQUEST: usize = 3;

// Scoring ------------------------------------------------------------------
pub const SCORE_PER_MOVE: u32 = 1;
pub const COINS_PER_MOVE: u32 = 5;
pub const IQ_PER_MOVE: u32 = 2;
pub const IQ_MAX: u32 = 100;

// Session defaults ---------------------------------------------------------
pub const DEFAULT_STARTING_LETTER: char = 'S';

// Progression --------------------------------------------------------------
pub const WINS_MILESTONE: u32 = 25;

// Persistence key prefixes -------------------------------------------------
pub(crate) const STORE_BEST_SCORE_PREFIX: &str = "atlasPlayBestScore_";
pub(crate) const STORE_BEST_STREAK_PREFIX: &str = "atlasPlayBestStreak_";
pub(crate) const STORE_BEST_IQ_PREFIX: &str = "atlasPlayBestIQ_";
pub(crate) const STORE_TOTAL_WINS_PREFIX: &str = "atlasPlayTotalWins_";
pub(crate) const STORE_WINS_CELEBRATED_PREFIX: &str = "atlasPlay25WinsCelebrated_";
