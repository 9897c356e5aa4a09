//! Personal records and win milestones, persisted per player identity.

use anyhow::Result;

use crate::constants::{
    STORE_BEST_IQ_PREFIX, STORE_BEST_SCORE_PREFIX, STORE_BEST_STREAK_PREFIX,
    STORE_TOTAL_WINS_PREFIX, STORE_WINS_CELEBRATED_PREFIX, WINS_MILESTONE,
};
use crate::state::{RecordKind, Stats};
use crate::store::{RecordStore, record_key};

/// Tracks best score/streak/IQ, total wins, and the one-shot wins milestone
/// for the committed player. Values are cached here and written through to
/// the store the moment a record or win is detected.
#[derive(Debug, Clone)]
pub struct ProgressTracker<S> {
    store: S,
    player: Option<String>,
    best_score: u32,
    best_streak: u32,
    best_iq: u32,
    total_wins: u32,
    milestone_celebrated: bool,
}

impl<S: RecordStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            player: None,
            best_score: 0,
            best_streak: 0,
            best_iq: 0,
            total_wins: 0,
            milestone_celebrated: false,
        }
    }

    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub const fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub const fn best_iq(&self) -> u32 {
        self.best_iq
    }

    #[must_use]
    pub const fn total_wins(&self) -> u32 {
        self.total_wins
    }

    #[must_use]
    pub const fn milestone_celebrated(&self) -> bool {
        self.milestone_celebrated
    }

    /// Load persisted records for `name`. Absent keys read as zero/false;
    /// unparseable values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read; already
    /// loaded fields keep their values, the rest stay at defaults.
    pub fn load_player(&mut self, name: &str) -> Result<()> {
        self.reset_cache();
        self.player = Some(name.to_string());
        self.best_score = self.read_u32(STORE_BEST_SCORE_PREFIX)?;
        self.best_streak = self.read_u32(STORE_BEST_STREAK_PREFIX)?;
        self.best_iq = self.read_u32(STORE_BEST_IQ_PREFIX)?;
        self.total_wins = self.read_u32(STORE_TOTAL_WINS_PREFIX)?;
        self.milestone_celebrated = self.read_flag(STORE_WINS_CELEBRATED_PREFIX)?;
        Ok(())
    }

    /// Forget the current player and cached values. Persisted records are
    /// never deleted.
    pub fn clear_player(&mut self) {
        self.player = None;
        self.reset_cache();
    }

    /// Compare against the persisted bests, in fixed priority order: score,
    /// then streak, then IQ. The first strictly-greater (and non-zero) value
    /// wins; at most one record is reported per check, even if several are
    /// exceeded simultaneously.
    ///
    /// # Errors
    ///
    /// Returns an error when the new best cannot be persisted; the cached
    /// best is already updated so the record will not re-fire this session.
    pub fn check_records(&mut self, stats: &Stats, streak: u32) -> Result<Option<(RecordKind, u32)>> {
        if self.player.is_none() {
            return Ok(None);
        }
        if stats.score > 0 && stats.score > self.best_score {
            self.best_score = stats.score;
            self.write_u32(STORE_BEST_SCORE_PREFIX, stats.score)?;
            return Ok(Some((RecordKind::Score, stats.score)));
        }
        if streak > 0 && streak > self.best_streak {
            self.best_streak = streak;
            self.write_u32(STORE_BEST_STREAK_PREFIX, streak)?;
            return Ok(Some((RecordKind::Streak, streak)));
        }
        if stats.iq > 0 && stats.iq > self.best_iq {
            self.best_iq = stats.iq;
            self.write_u32(STORE_BEST_IQ_PREFIX, stats.iq)?;
            return Ok(Some((RecordKind::Iq, stats.iq)));
        }
        Ok(None)
    }

    /// Record a player win and persist the new total.
    ///
    /// # Errors
    ///
    /// Returns an error when the total cannot be persisted.
    pub fn record_win(&mut self) -> Result<u32> {
        self.total_wins += 1;
        self.write_u32(STORE_TOTAL_WINS_PREFIX, self.total_wins)?;
        Ok(self.total_wins)
    }

    /// Whether the wins milestone is due: threshold reached and never
    /// celebrated for this player.
    #[must_use]
    pub const fn milestone_due(&self) -> bool {
        self.total_wins >= WINS_MILESTONE && !self.milestone_celebrated
    }

    /// Permanently mark the milestone celebrated so it never re-fires.
    ///
    /// # Errors
    ///
    /// Returns an error when the flag cannot be persisted.
    pub fn mark_milestone_celebrated(&mut self) -> Result<()> {
        self.milestone_celebrated = true;
        self.write(STORE_WINS_CELEBRATED_PREFIX, "true")
    }

    fn reset_cache(&mut self) {
        self.best_score = 0;
        self.best_streak = 0;
        self.best_iq = 0;
        self.total_wins = 0;
        self.milestone_celebrated = false;
    }

    fn key(&self, prefix: &str) -> Option<String> {
        self.player.as_deref().map(|name| record_key(prefix, name))
    }

    fn read_u32(&self, prefix: &str) -> Result<u32> {
        let Some(key) = self.key(prefix) else {
            return Ok(0);
        };
        let raw = self.store.get(&key).map_err(anyhow::Error::new)?;
        Ok(raw.and_then(|v| v.parse().ok()).unwrap_or(0))
    }

    fn read_flag(&self, prefix: &str) -> Result<bool> {
        let Some(key) = self.key(prefix) else {
            return Ok(false);
        };
        let raw = self.store.get(&key).map_err(anyhow::Error::new)?;
        Ok(raw.as_deref() == Some("true"))
    }

    fn write_u32(&self, prefix: &str, value: u32) -> Result<()> {
        self.write(prefix, &value.to_string())
    }

    fn write(&self, prefix: &str, value: &str) -> Result<()> {
        let Some(key) = self.key(prefix) else {
            return Ok(());
        };
        self.store.set(&key, value).map_err(anyhow::Error::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tracker_with_player(store: &MemoryStore, name: &str) -> ProgressTracker<MemoryStore> {
        let mut tracker = ProgressTracker::new(store.clone());
        tracker.load_player(name).unwrap();
        tracker
    }

    #[test]
    fn absent_records_default_to_zero_and_false() {
        let store = MemoryStore::new();
        let tracker = tracker_with_player(&store, "Ada");
        assert_eq!(tracker.best_score(), 0);
        assert_eq!(tracker.total_wins(), 0);
        assert!(!tracker.milestone_celebrated());
    }

    #[test]
    fn unparseable_stored_value_reads_as_zero() {
        let store = MemoryStore::new();
        store
            .set(&record_key(STORE_BEST_SCORE_PREFIX, "Ada"), "garbage")
            .unwrap();
        let tracker = tracker_with_player(&store, "Ada");
        assert_eq!(tracker.best_score(), 0);
    }

    #[test]
    fn score_record_wins_over_simultaneous_streak_and_iq_records() {
        let store = MemoryStore::new();
        let mut tracker = tracker_with_player(&store, "Ada");
        let stats = Stats {
            score: 3,
            coins: 15,
            iq: 6,
        };
        let hit = tracker.check_records(&stats, 3).unwrap();
        assert_eq!(hit, Some((RecordKind::Score, 3)));
        assert_eq!(
            store
                .get(&record_key(STORE_BEST_SCORE_PREFIX, "Ada"))
                .unwrap()
                .as_deref(),
            Some("3")
        );
        // Streak and IQ were also new bests but must not have been written.
        assert_eq!(
            store.get(&record_key(STORE_BEST_STREAK_PREFIX, "Ada")).unwrap(),
            None
        );
        // The next check with the same values reports the runner-up.
        let hit = tracker.check_records(&stats, 3).unwrap();
        assert_eq!(hit, Some((RecordKind::Streak, 3)));
    }

    #[test]
    fn zero_values_never_count_as_records() {
        let store = MemoryStore::new();
        let mut tracker = tracker_with_player(&store, "Ada");
        let hit = tracker.check_records(&Stats::default(), 0).unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn check_records_is_inert_without_a_player() {
        let mut tracker = ProgressTracker::new(MemoryStore::new());
        let stats = Stats {
            score: 10,
            coins: 50,
            iq: 20,
        };
        assert_eq!(tracker.check_records(&stats, 10).unwrap(), None);
    }

    #[test]
    fn wins_persist_across_reloads_and_milestone_fires_once() {
        let store = MemoryStore::new();
        let mut tracker = tracker_with_player(&store, "Ada");
        for _ in 0..WINS_MILESTONE {
            tracker.record_win().unwrap();
        }
        assert!(tracker.milestone_due());
        tracker.mark_milestone_celebrated().unwrap();
        assert!(!tracker.milestone_due());

        // A fresh tracker over the same store sees the persisted state.
        let reloaded = tracker_with_player(&store, "Ada");
        assert_eq!(reloaded.total_wins(), WINS_MILESTONE);
        assert!(reloaded.milestone_celebrated());
        assert!(!reloaded.milestone_due());
    }

    #[test]
    fn records_are_scoped_by_player_identity() {
        let store = MemoryStore::new();
        let mut ada = tracker_with_player(&store, "Ada");
        ada.record_win().unwrap();
        let grace = tracker_with_player(&store, "Grace");
        assert_eq!(grace.total_wins(), 0);
        let reloaded = tracker_with_player(&store, "  ada ");
        assert_eq!(reloaded.total_wins(), 1, "identity normalization matches");
    }
}
