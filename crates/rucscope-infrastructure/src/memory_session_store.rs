//! In-memory session store.

use std::sync::{Arc, RwLock};

use rucscope_core::error::{ClientError, Result};
use rucscope_core::session::{Session, SessionStore};
use rucscope_core::user::User;

/// Session store that lives only as long as the process.
///
/// Token and user are held in one slot, so they are always replaced
/// together. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<RwLock<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(session))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| ClientError::storage(format!("Session lock poisoned: {}", e)))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| ClientError::storage(format!("Session lock poisoned: {}", e)))?;
        *slot = None;
        Ok(())
    }

    fn token(&self) -> Option<String> {
        let slot = self.slot.read().ok()?;
        slot.as_ref().map(|session| session.token.clone())
    }

    fn user(&self) -> Option<User> {
        let slot = self.slot.read().ok()?;
        slot.as_ref().map(|session| session.user.clone())
    }
}
