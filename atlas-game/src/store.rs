//! Key-value persistence contract for per-player records.
//!
//! The core never owns storage; shells plug in whatever backs it (browser
//! local storage, a file, a test map). Keys are namespaced by record-type
//! prefix plus a normalized player identity.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Trait for abstracting record persistence.
/// Platform-specific implementations should provide this.
pub trait RecordStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value. Absent keys are `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Build a storage key from a record-type prefix and a player name.
/// Identity normalization: trimmed, whitespace runs collapsed to `_`,
/// lower-cased.
#[must_use]
pub fn record_key(prefix: &str, player_name: &str) -> String {
    let id = player_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("{prefix}{id}")
}

/// In-memory store used by tests and the default shell wiring.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl RecordStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORE_BEST_SCORE_PREFIX;

    #[test]
    fn record_key_normalizes_player_identity() {
        assert_eq!(
            record_key(STORE_BEST_SCORE_PREFIX, "  Ada   Lovelace "),
            "atlasPlayBestScore_ada_lovelace"
        );
        assert_eq!(record_key("p_", "Solo"), "p_solo");
    }

    #[test]
    fn memory_store_roundtrips_and_shares_backing() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.set("k", "7").unwrap();
        assert_eq!(alias.get("k").unwrap().as_deref(), Some("7"));
        assert_eq!(alias.get("missing").unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
