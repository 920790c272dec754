//! File-backed session store.
//!
//! The token and the user profile are kept as two independently keyed files
//! inside the session directory.

use std::path::{Path, PathBuf};

use rucscope_core::error::Result;
use rucscope_core::session::{Session, SessionStore};
use rucscope_core::user::User;

use crate::paths::ClientPaths;
use crate::storage::{AtomicFile, DirLock};

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// Session store persisting to `<session_dir>/token` and
/// `<session_dir>/user.json`.
///
/// Writes are ordered so that the token never exists without a user: `save`
/// writes the user first, `clear` removes the token first. A save whose
/// token write fails is rolled back. Both hold the directory lock so
/// concurrent processes cannot interleave.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
    token_file: AtomicFile,
    user_file: AtomicFile,
}

impl FileSessionStore {
    /// Creates a store rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            token_file: AtomicFile::new(dir.join(TOKEN_FILE)),
            user_file: AtomicFile::new(dir.join(USER_FILE)),
            dir,
        }
    }

    /// Creates a store at the default location from [`ClientPaths`].
    pub fn from_paths(paths: &ClientPaths) -> Result<Self> {
        Ok(Self::new(paths.session_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Undoes a save whose token write failed after the user was written.
    ///
    /// Drops the old token together with the new user, leaving the store
    /// logged out. If the old token cannot be removed, the previous user
    /// profile is put back so the pair on disk still matches.
    fn roll_back_save(&self, previous_user: Option<&str>) {
        match self.token_file.remove() {
            Ok(()) => {
                if let Err(e) = self.user_file.remove() {
                    tracing::warn!("[FileSessionStore] Failed to remove user profile: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("[FileSessionStore] Failed to remove stale token: {}", e);
                let restored = match previous_user {
                    Some(content) => self.user_file.write(content),
                    None => self.user_file.remove(),
                };
                if let Err(e) = restored {
                    tracing::warn!("[FileSessionStore] Failed to restore user profile: {}", e);
                }
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;

        let _lock = DirLock::acquire(&self.dir)?;
        let previous_user = self.user_file.read()?;
        self.user_file.write(&user_json)?;
        if let Err(e) = self.token_file.write(&session.token) {
            tracing::warn!("[FileSessionStore] Token write failed, rolling back: {}", e);
            self.roll_back_save(previous_user.as_deref());
            return Err(e.into());
        }

        tracing::debug!("[FileSessionStore] Saved session for user {}", session.user.id);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        let _lock = DirLock::acquire(&self.dir)?;
        // The user file is removed even when the token removal fails.
        let token_removed = self.token_file.remove();
        let user_removed = self.user_file.remove();
        token_removed?;
        user_removed?;

        tracing::debug!("[FileSessionStore] Cleared session");
        Ok(())
    }

    fn token(&self) -> Option<String> {
        match self.token_file.read() {
            Ok(Some(token)) => {
                let token = token.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("[FileSessionStore] Failed to read token: {}", e);
                None
            }
        }
    }

    fn user(&self) -> Option<User> {
        let content = match self.user_file.read() {
            Ok(content) => content?,
            Err(e) => {
                tracing::warn!("[FileSessionStore] Failed to read user profile: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(
                    "[FileSessionStore] Ignoring corrupt user profile at {}: {}",
                    self.user_file.path().display(),
                    e
                );
                None
            }
        }
    }
}
