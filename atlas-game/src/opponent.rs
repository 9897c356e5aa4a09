//! Scripted local opponent: pick a candidate from the registry, then run it
//! through the same validation the player's moves get.

use std::collections::HashSet;

use rand::Rng;

use crate::constants::{OPPONENT_THINK_MAX_MS, OPPONENT_THINK_MIN_MS};
use crate::event::MoveFailure;
use crate::registry::{PlaceRegistry, normalize};

/// Simulated thinking delay before the opponent acts. Pacing only; the
/// engine surfaces it so shells and tests can schedule the resolution call.
pub fn think_delay_ms(rng: &mut impl Rng) -> u64 {
    rng.gen_range(OPPONENT_THINK_MIN_MS..=OPPONENT_THINK_MAX_MS)
}

/// Select and validate the opponent's move.
///
/// The double validation is deliberate: the suggestion already filters by
/// letter and chain, but the candidate is still pushed through the checks
/// applied to player moves so both sides play by identical rules. Any
/// failure here is a forfeit, i.e. a win for the player.
///
/// # Errors
///
/// Returns the forfeit reason, in precedence order: no candidate, wrong
/// first letter, already in the used set, rejected by registry validation.
pub fn plan_move(
    registry: &PlaceRegistry,
    chain: &[String],
    used: &HashSet<String>,
    expected_letter: char,
    rng: &mut impl Rng,
) -> Result<String, MoveFailure> {
    let exclude: HashSet<String> = chain.iter().map(|entry| normalize(entry)).collect();
    let Some(candidate) = registry.suggest_by_letter(expected_letter, &exclude, rng) else {
        return Err(MoveFailure::OpponentNoValidMove);
    };
    let candidate = candidate.to_string();
    let normalized = normalize(&candidate);

    let first = normalized.chars().next().map(|c| c.to_ascii_uppercase());
    if first != Some(expected_letter.to_ascii_uppercase()) {
        return Err(MoveFailure::OpponentInvalidMove { name: candidate });
    }
    if used.contains(&normalized) {
        return Err(MoveFailure::OpponentDuplicateMove { name: candidate });
    }
    if let Err(reason) = registry.validate(&candidate, chain) {
        return Err(MoveFailure::UnrecognizedPlace {
            message: format!("{reason} You win!"),
        });
    }
    Ok(candidate)
}
