//! The turn engine: owns the game session and serializes every mutation.
//!
//! All state changes flow through the public entry points here (submit,
//! hint, pause/resume, timer ticks, opponent resolution, restart/exit), so
//! single-writer ownership of [`GameSession`] is the only concurrency
//! discipline required. Drivers schedule the 1-second tick and the
//! opponent's announced think delay; the engine never blocks.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::constants::{
    COUNTDOWN_SEQUENCE, DEFAULT_STARTING_LETTER, INITIAL_RETRIES, PLAYER_TURN_DURATION,
};
use crate::event::{GameEvent, MoveFailure};
use crate::opponent;
use crate::player::IdentityProvider;
use crate::progress::ProgressTracker;
use crate::registry::{PlaceRegistry, last_letter, normalize};
use crate::state::{GamePhase, GameSession, Overlay, PlayerKind};
use crate::store::RecordStore;
use crate::timer::{TickOutcome, TimerToken, TurnTimer};

/// Result of a player submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Preconditions not met (wrong phase, paused, overlay open, empty
    /// input); the session is untouched.
    Ignored,
    Accepted {
        name: String,
        next_letter: char,
    },
    Rejected {
        failure: MoveFailure,
        retries_left: i32,
    },
    Ended {
        message: String,
    },
}

/// Result of asking the engine to run the opponent's pending turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentResolution {
    /// No opponent turn is pending.
    Idle,
    /// Blocked by pause, an overlay, or being offline; still pending. The
    /// engine re-announces the turn once the blocker clears.
    Deferred,
    Moved {
        name: String,
        next_letter: char,
    },
    PlayerWon {
        message: String,
    },
}

/// Core game engine binding the session to its injected collaborators.
pub struct TurnEngine<S, I>
where
    S: RecordStore,
    I: IdentityProvider,
{
    session: GameSession,
    registry: PlaceRegistry,
    progress: ProgressTracker<S>,
    identity: I,
    rng: ChaCha20Rng,
    timer: TurnTimer,
    paused: bool,
    online: bool,
    overlay: Option<Overlay>,
    opponent_pending: bool,
    events: Vec<GameEvent>,
}

impl<S, I> TurnEngine<S, I>
where
    S: RecordStore,
    I: IdentityProvider,
{
    /// Create an engine. A returning player (identity already committed)
    /// starts at the countdown, everyone else at name input.
    pub fn new(registry: PlaceRegistry, store: S, identity: I, seed: u64) -> Self {
        let mut engine = Self {
            session: GameSession::with_seed(seed),
            registry,
            progress: ProgressTracker::new(store),
            identity,
            rng: ChaCha20Rng::seed_from_u64(seed),
            timer: TurnTimer::default(),
            paused: false,
            online: true,
            overlay: None,
            opponent_pending: false,
            events: Vec::new(),
        };
        if let Some(name) = engine.identity.player_name() {
            if let Err(err) = engine.progress.load_player(&name) {
                log::warn!("failed to load records for '{name}': {err}");
            }
            engine.session.phase = GamePhase::Countdown;
        }
        engine
    }

    // -- accessors ---------------------------------------------------------

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.session.phase
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.online
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    #[must_use]
    pub const fn opponent_pending(&self) -> bool {
        self.opponent_pending
    }

    /// Token of the running turn countdown, if one is active.
    #[must_use]
    pub const fn timer_token(&self) -> Option<TimerToken> {
        self.timer.token()
    }

    /// Seconds left on the current turn.
    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.timer.remaining()
    }

    #[must_use]
    pub fn player_name(&self) -> Option<String> {
        self.identity.player_name()
    }

    /// Persisted-record view for shells (bests, wins).
    #[must_use]
    pub const fn progress(&self) -> &ProgressTracker<S> {
        &self.progress
    }

    #[must_use]
    pub const fn registry(&self) -> &PlaceRegistry {
        &self.registry
    }

    /// Take all events emitted since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // -- name & countdown --------------------------------------------------

    /// Commit the player name and move to the countdown. Returns false when
    /// the name is empty after trimming or the phase is not name input.
    pub fn submit_name(&mut self, name: &str) -> bool {
        if self.session.phase != GamePhase::NameInput {
            return false;
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.push(GameEvent::NameRequired);
            return false;
        }
        self.identity.commit(trimmed);
        if let Err(err) = self.progress.load_player(trimmed) {
            log::warn!("failed to load records for '{trimmed}': {err}");
        }
        self.session.countdown_step = 0;
        self.session.phase = GamePhase::Countdown;
        true
    }

    /// Advance the pre-round countdown one step; the driver calls this every
    /// [`crate::constants::COUNTDOWN_STEP_MS`]. The final step starts the
    /// round. Returns false outside the countdown phase.
    pub fn advance_countdown(&mut self) -> bool {
        if self.session.phase != GamePhase::Countdown || !self.identity.is_committed() {
            return false;
        }
        let step = self.session.countdown_step;
        if let Some(&symbol) = COUNTDOWN_SEQUENCE.get(step) {
            self.push(GameEvent::CountdownTick { step, symbol });
        }
        self.session.countdown_step = step + 1;
        if self.session.countdown_step >= COUNTDOWN_SEQUENCE.len() {
            self.begin_round();
        }
        true
    }

    fn begin_round(&mut self) {
        self.session.reset_round();
        self.session.phase = GamePhase::PlayerTurn;
        self.overlay = None;
        self.opponent_pending = false;
        self.paused = false;
        self.push(GameEvent::TurnStarted {
            letter: DEFAULT_STARTING_LETTER,
        });
        self.start_player_timer();
    }

    // -- player moves ------------------------------------------------------

    /// Validate and apply a player submission.
    ///
    /// Failure precedence is fixed and surfaced text depends on it: starting
    /// letter, then used-set duplicate, then registry validation (chain
    /// duplicate before membership), then a defensive used-set re-check of
    /// the canonical name.
    pub fn submit_move(&mut self, input: &str) -> SubmitOutcome {
        if self.session.phase != GamePhase::PlayerTurn
            || self.paused
            || self.overlay.is_some()
        {
            return SubmitOutcome::Ignored;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.timer.cancel();
        let normalized = normalize(trimmed);
        let expected = self.session.expected_letter;

        let first = normalized.chars().next().map(|c| c.to_ascii_uppercase());
        if first != Some(expected.to_ascii_uppercase()) {
            return self.reject(
                MoveFailure::InvalidLetter { expected },
                format!("Wrong starting letter. Expected '{expected}'."),
            );
        }

        if self.session.used.contains(&normalized) {
            return self.reject(
                MoveFailure::DuplicateLocation {
                    name: trimmed.to_string(),
                },
                format!("'{trimmed}' has already been used. No retries left."),
            );
        }

        if let Err(err) = self.registry.validate(trimmed, &self.session.chain) {
            let message = match err {
                crate::registry::ValidationError::Unrecognized(ref name) => format!(
                    "Only continents, countries, states, and famous cities are allowed. \
                     '{name}' is not recognized."
                ),
                ref other => other.to_string(),
            };
            let game_over_message = format!("{message} No retries left.");
            return self.reject(MoveFailure::UnrecognizedPlace { message }, game_over_message);
        }

        // Canonical display casing; same normalized key as the input, but
        // re-check the used set to catch late-normalized collisions.
        let canonical = self
            .registry
            .canonical_name(trimmed)
            .map_or_else(|| trimmed.to_string(), str::to_string);
        if self.session.used.contains(&normalize(&canonical)) {
            return self.reject(
                MoveFailure::DuplicateLocation {
                    name: canonical.clone(),
                },
                format!("'{canonical}' has already been used. No retries left."),
            );
        }

        self.accept(canonical)
    }

    fn accept(&mut self, name: String) -> SubmitOutcome {
        self.session.record_move(&name);
        self.session.stats.apply_move();
        self.session.streak += 1;
        self.session.retries_left = INITIAL_RETRIES;

        let next_letter = last_letter(&name).unwrap_or(DEFAULT_STARTING_LETTER);
        self.session.expected_letter = next_letter;

        self.push(GameEvent::MoveAccepted {
            name: name.clone(),
            by: PlayerKind::User,
            next_letter,
        });
        self.maybe_celebrate_record();

        self.session.phase = GamePhase::LoadingNextTurn;
        self.session.current_player = PlayerKind::Opponent;
        self.opponent_pending = true;
        self.announce_opponent();

        SubmitOutcome::Accepted { name, next_letter }
    }

    fn reject(&mut self, failure: MoveFailure, game_over_message: String) -> SubmitOutcome {
        self.session.retries_left -= 1;
        let remaining = self.session.retries_left;
        if remaining >= 0 {
            self.push(GameEvent::MoveRejected {
                failure: failure.clone(),
                retries_left: remaining,
            });
            self.start_player_timer();
            SubmitOutcome::Rejected {
                failure,
                retries_left: remaining,
            }
        } else {
            self.game_over(game_over_message.clone(), false);
            SubmitOutcome::Ended {
                message: game_over_message,
            }
        }
    }

    // -- hints -------------------------------------------------------------

    /// Spend one hint and return up to three suggestions for the current
    /// target letter. An empty result still consumes the budget. Returns
    /// `None` when hints are unavailable (wrong phase, paused, overlay open,
    /// budget exhausted); the session is untouched in that case.
    pub fn request_hint(&mut self) -> Option<Vec<String>> {
        if self.session.phase != GamePhase::PlayerTurn
            || self.paused
            || self.overlay.is_some()
            || self.session.hints_left == 0
        {
            return None;
        }
        let letter = match self.session.last_played() {
            None => DEFAULT_STARTING_LETTER,
            Some(last) => last_letter(last)?,
        };
        let hints = if letter.is_ascii_alphabetic() {
            let exclude = self.session.chain_exclusions();
            self.registry.hints_by_letter(
                letter,
                &exclude,
                crate::constants::HINTS_PER_REQUEST,
                &mut self.rng,
            )
        } else {
            Vec::new()
        };
        self.session.hints_left -= 1;
        self.push(GameEvent::HintsReady {
            hints: hints.clone(),
            hints_left: self.session.hints_left,
        });
        Some(hints)
    }

    // -- timer -------------------------------------------------------------

    /// Deliver one 1-second tick for `token`. Ticks are ignored while
    /// paused, offline, blocked by an overlay, or outside the player turn.
    /// Expiry ends the game without consulting retries.
    pub fn tick_timer(&mut self, token: TimerToken) -> TickOutcome {
        if self.paused
            || !self.online
            || self.overlay.is_some()
            || self.session.phase != GamePhase::PlayerTurn
        {
            return TickOutcome::Ignored;
        }
        let outcome = self.timer.tick(token);
        if outcome == TickOutcome::Expired {
            self.game_over(MoveFailure::Timeout.to_string(), false);
        }
        outcome
    }

    fn start_player_timer(&mut self) {
        if self.session.phase != GamePhase::PlayerTurn
            || self.paused
            || !self.online
            || self.overlay.is_some()
        {
            self.timer.cancel();
            return;
        }
        self.timer.start(PLAYER_TURN_DURATION);
    }

    // -- opponent ----------------------------------------------------------

    /// Run the opponent's pending turn. Drivers call this once the announced
    /// think delay has elapsed; while blocked the turn stays pending and is
    /// re-announced when the blocker clears.
    pub fn resolve_opponent_turn(&mut self) -> OpponentResolution {
        if !self.opponent_pending
            || !matches!(
                self.session.phase,
                GamePhase::LoadingNextTurn | GamePhase::OpponentTurn
            )
        {
            return OpponentResolution::Idle;
        }
        if self.paused || !self.online || self.overlay.is_some() {
            return OpponentResolution::Deferred;
        }
        self.session.phase = GamePhase::OpponentTurn;

        let planned = opponent::plan_move(
            &self.registry,
            &self.session.chain,
            &self.session.used,
            self.session.expected_letter,
            &mut self.rng,
        );
        self.opponent_pending = false;
        match planned {
            Err(failure) => {
                let message = failure.to_string();
                self.game_over(message.clone(), true);
                OpponentResolution::PlayerWon { message }
            }
            Ok(name) => {
                self.session.record_move(&name);
                let next_letter = last_letter(&name).unwrap_or(DEFAULT_STARTING_LETTER);
                self.session.expected_letter = next_letter;
                self.push(GameEvent::MoveAccepted {
                    name: name.clone(),
                    by: PlayerKind::Opponent,
                    next_letter,
                });
                self.session.phase = GamePhase::PlayerTurn;
                self.session.current_player = PlayerKind::User;
                self.start_player_timer();
                OpponentResolution::Moved { name, next_letter }
            }
        }
    }

    fn announce_opponent(&mut self) {
        let delay_ms = opponent::think_delay_ms(&mut self.rng);
        self.push(GameEvent::OpponentThinking { delay_ms });
    }

    fn reannounce_opponent_if_unblocked(&mut self) {
        if self.opponent_pending
            && matches!(
                self.session.phase,
                GamePhase::LoadingNextTurn | GamePhase::OpponentTurn
            )
            && !self.paused
            && self.online
            && self.overlay.is_none()
        {
            self.announce_opponent();
        }
    }

    // -- pause / connectivity ----------------------------------------------

    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.push(GameEvent::Paused);
    }

    /// Resume play. Restarts the full turn countdown if the player is on the
    /// clock and re-announces a pending opponent turn.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.push(GameEvent::Resumed);
        self.start_player_timer();
        self.reannounce_opponent_if_unblocked();
    }

    /// Update the connectivity signal. Going offline halts timer progression
    /// without erroring; coming back online resumes it if the player is
    /// still on the clock.
    pub fn set_online(&mut self, online: bool) {
        if self.online == online {
            return;
        }
        self.online = online;
        self.push(GameEvent::OnlineChanged { online });
        if online {
            self.start_player_timer();
            self.reannounce_opponent_if_unblocked();
        } else {
            self.timer.cancel();
        }
    }

    // -- overlays ----------------------------------------------------------

    /// Close the active celebration/milestone overlay and unblock whatever
    /// it was holding: the pending opponent turn or the player's countdown.
    pub fn dismiss_overlay(&mut self) {
        if self.overlay.take().is_none() {
            return;
        }
        match self.session.phase {
            GamePhase::PlayerTurn => self.start_player_timer(),
            _ => self.reannounce_opponent_if_unblocked(),
        }
    }

    fn maybe_celebrate_record(&mut self) {
        if self.overlay.is_some() {
            return;
        }
        match self
            .progress
            .check_records(&self.session.stats, self.session.streak)
        {
            Ok(Some((kind, value))) => {
                self.overlay = Some(Overlay::Record { kind, value });
                self.push(GameEvent::RecordAchieved { kind, value });
            }
            Ok(None) => {}
            Err(err) => log::warn!("record check failed: {err}"),
        }
    }

    // -- terminal transitions ----------------------------------------------

    fn game_over(&mut self, message: String, player_won: bool) {
        self.timer.cancel();
        if self.session.phase == GamePhase::GameOver {
            return;
        }
        log::debug!("game over: {message} (player_won={player_won})");
        self.paused = false;
        self.opponent_pending = false;
        self.session.phase = GamePhase::GameOver;
        self.session.game_over_message = Some(message.clone());
        self.session.player_won = player_won;

        let final_streak = self.session.streak;
        self.session.streak = 0;
        if self.overlay.is_none() {
            match self.progress.check_records(&self.session.stats, final_streak) {
                Ok(Some((kind, value))) => {
                    self.overlay = Some(Overlay::Record { kind, value });
                    self.push(GameEvent::RecordAchieved { kind, value });
                }
                Ok(None) => {}
                Err(err) => log::warn!("record check failed: {err}"),
            }
        }

        if player_won && self.identity.is_committed() {
            match self.progress.record_win() {
                Ok(wins) => {
                    if self.progress.milestone_due() && self.overlay.is_none() {
                        match self.progress.mark_milestone_celebrated() {
                            Ok(()) => {
                                self.overlay = Some(Overlay::Milestone { wins });
                                self.push(GameEvent::MilestoneReached { wins });
                            }
                            Err(err) => log::warn!("milestone flag write failed: {err}"),
                        }
                    }
                }
                Err(err) => log::warn!("win count write failed: {err}"),
            }
        }

        self.push(GameEvent::GameOver {
            message,
            player_won,
        });
    }

    /// Start a new round with the same player. Round values reset when the
    /// countdown completes, not here.
    pub fn restart(&mut self) {
        self.timer.cancel();
        self.paused = false;
        self.overlay = None;
        self.opponent_pending = false;
        self.session.game_over_message = None;
        self.session.player_won = false;
        self.session.countdown_step = 0;
        self.session.phase = if self.identity.is_committed() {
            GamePhase::Countdown
        } else {
            GamePhase::NameInput
        };
        self.push(GameEvent::Restarted);
    }

    /// Leave the game and return to name input, dropping the committed
    /// identity. Persisted records are kept.
    pub fn exit_to_name_input(&mut self) {
        self.timer.cancel();
        self.paused = false;
        self.overlay = None;
        self.opponent_pending = false;
        self.identity.clear();
        self.progress.clear_player();
        self.session.reset_round();
        self.session.countdown_step = 0;
        self.session.phase = GamePhase::NameInput;
        self.push(GameEvent::Exited);
    }

    fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
