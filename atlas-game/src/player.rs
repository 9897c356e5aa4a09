//! Player identity as an injected collaborator.
//!
//! The original kept the player name in an ambient context; here the engine
//! receives an explicit provider so tests can swap in a fake and shells can
//! back it with whatever persistence they use.

use std::cell::RefCell;
use std::rc::Rc;

/// Current player identity and its committed flag. The engine only starts a
/// session once a name is committed.
pub trait IdentityProvider {
    /// The committed player name, if any.
    fn player_name(&self) -> Option<String>;

    fn is_committed(&self) -> bool {
        self.player_name().is_some()
    }

    /// Commit a name. The engine passes it already trimmed and non-empty.
    fn commit(&self, name: &str);

    /// Drop the committed identity (exit / change-name flows).
    fn clear(&self);
}

/// In-memory identity used by tests and the default shell wiring.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentity {
    name: Rc<RefCell<Option<String>>>,
}

impl MemoryIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity that starts out already committed, mirroring a returning
    /// player whose name was restored by the shell.
    #[must_use]
    pub fn committed(name: &str) -> Self {
        let identity = Self::default();
        identity.commit(name);
        identity
    }
}

impl IdentityProvider for MemoryIdentity {
    fn player_name(&self) -> Option<String> {
        self.name.borrow().clone()
    }

    fn commit(&self, name: &str) {
        *self.name.borrow_mut() = Some(name.to_string());
    }

    fn clear(&self) {
        *self.name.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_and_clear_drive_the_committed_flag() {
        let identity = MemoryIdentity::new();
        assert!(!identity.is_committed());
        identity.commit("Ada");
        assert!(identity.is_committed());
        assert_eq!(identity.player_name().as_deref(), Some("Ada"));
        identity.clear();
        assert!(!identity.is_committed());
    }

    #[test]
    fn clones_share_the_same_identity_cell() {
        let identity = MemoryIdentity::new();
        let alias = identity.clone();
        identity.commit("Ada");
        assert_eq!(alias.player_name().as_deref(), Some("Ada"));
    }
}
