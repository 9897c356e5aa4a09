//! Static place-name lookup shared by player and opponent validation.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::data::PlaceData;

/// Comparison form used everywhere: trimmed and lower-cased.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Upper-cased final character of a place name, if any.
///
/// This is deliberately naive: a name ending in punctuation (e.g.
/// "Washington D.C.") yields a "letter" no place can start with, which the
/// opponent resolves as a forfeit.
#[must_use]
pub fn last_letter(name: &str) -> Option<char> {
    name.trim().chars().last().map(|c| c.to_ascii_uppercase())
}

/// Why the registry rejected a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' has already been used in the current chain.")]
    ChainDuplicate(String),
    #[error("'{0}' is not a recognized place.")]
    Unrecognized(String),
}

/// Immutable dictionary of valid place names.
///
/// Membership is case- and whitespace-insensitive. The same instance serves
/// both players' moves so identical rules apply to each.
#[derive(Debug, Clone)]
pub struct PlaceRegistry {
    names: Vec<String>,
    canonical: HashMap<String, usize>,
}

impl PlaceRegistry {
    #[must_use]
    pub fn new(data: PlaceData) -> Self {
        let names = data.all_names();
        let mut canonical = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            // First spelling wins when two entries normalize identically.
            canonical.entry(normalize(name)).or_insert(idx);
        }
        Self { names, canonical }
    }

    /// Registry over the compiled-in dictionary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(PlaceData::builtin())
    }

    /// Number of distinct normalized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// True iff the normalized name is in the dictionary.
    #[must_use]
    pub fn is_known_place(&self, name: &str) -> bool {
        self.canonical.contains_key(&normalize(name))
    }

    /// Display casing for a known place, if present.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.canonical
            .get(&normalize(name))
            .map(|&idx| self.names[idx].as_str())
    }

    /// Full move validation: chain-relative duplicate first, then membership.
    ///
    /// The duplicate check is independent of the engine's global used-set so
    /// late-normalized collisions are still caught. Error precedence must not
    /// change; surfaced message text depends on it.
    ///
    /// # Errors
    ///
    /// `ChainDuplicate` when the normalized name already appears in `chain`,
    /// `Unrecognized` when it is not in the dictionary.
    pub fn validate(&self, name: &str, chain: &[String]) -> Result<(), ValidationError> {
        let normalized = normalize(name);
        if chain.iter().any(|entry| normalize(entry) == normalized) {
            return Err(ValidationError::ChainDuplicate(name.trim().to_string()));
        }
        if !self.canonical.contains_key(&normalized) {
            return Err(ValidationError::Unrecognized(name.trim().to_string()));
        }
        Ok(())
    }

    /// One uniformly-random name starting with `letter`, skipping `exclude`
    /// (normalized forms). `None` when the pool is exhausted.
    pub fn suggest_by_letter(
        &self,
        letter: char,
        exclude: &HashSet<String>,
        rng: &mut impl Rng,
    ) -> Option<&str> {
        let candidates = self.candidates(letter, exclude);
        candidates.choose(rng).map(|&idx| self.names[idx].as_str())
    }

    /// Up to `count` distinct names starting with `letter`, shuffled,
    /// skipping `exclude`. Returning fewer than `count` is not an error.
    pub fn hints_by_letter(
        &self,
        letter: char,
        exclude: &HashSet<String>,
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<String> {
        let mut candidates = self.candidates(letter, exclude);
        candidates.shuffle(rng);
        candidates
            .into_iter()
            .take(count)
            .map(|idx| self.names[idx].clone())
            .collect()
    }

    // Declaration order keeps draws reproducible for a given seed.
    fn candidates(&self, letter: char, exclude: &HashSet<String>) -> Vec<usize> {
        let wanted = letter.to_ascii_lowercase();
        self.names
            .iter()
            .enumerate()
            .filter(|(idx, name)| {
                let normalized = normalize(name);
                normalized.starts_with(wanted)
                    && !exclude.contains(normalized.as_str())
                    && self.canonical.get(&normalized).is_some_and(|&first| first == *idx)
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}
