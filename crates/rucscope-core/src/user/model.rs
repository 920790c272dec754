//! User domain model.

use serde::{Deserialize, Serialize};

/// Identity/profile of the logged-in user.
///
/// Returned by the backend on login and owned by the session store for the
/// lifetime of the session. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    /// Returns the upper-cased first letter of the name, used as an avatar.
    ///
    /// Falls back to `U` when the name is empty.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}
