//! Session store trait.

use crate::error::Result;
use crate::session::Session;
use crate::user::User;

/// Persistent holder of the current session.
///
/// This is the only component allowed to write the token and user profile.
/// Components depend on this capability rather than on a concrete storage
/// mechanism, so tests can substitute an in-memory store.
///
/// # Invariant
///
/// Token and user are written and cleared together. Implementations must make
/// sure that a token without a user is never observable at rest.
pub trait SessionStore: Send + Sync {
    /// Persists the session, overwriting any prior one.
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes the token and user. Safe to call when nothing is stored.
    fn clear(&self) -> Result<()>;

    /// Returns the stored bearer token, if any.
    fn token(&self) -> Option<String>;

    /// Returns the stored user profile.
    ///
    /// A stored value that cannot be decoded is reported as `None`.
    fn user(&self) -> Option<User>;

    /// True iff a token is present.
    ///
    /// The token is not validated here; the backend checks it on every request.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Returns the full session when both halves are present.
    fn session(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;
        Some(Session { token, user })
    }
}
