//! Session domain model.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// An authenticated session: the bearer token plus the profile it belongs to.
///
/// Exists from a successful login until logout. At most one session is active
/// per client profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential, sent as `Authorization: Bearer <token>`
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
