//! Login and logout exchanges.

use std::sync::Arc;

use rucscope_core::api::{ApiBackend, LoginRequest, LoginResponse};
use rucscope_core::error::{ClientError, Result};
use rucscope_core::navigation::{Navigation, Route};
use rucscope_core::session::SessionStore;
use rucscope_core::user::User;

/// Performs the authentication exchanges with the backend.
///
/// `login` only talks to the backend. Persisting the returned session is a
/// separate step (`complete_login`) so a caller can decide what to do with a
/// response before it becomes the active session.
pub struct AuthGateway {
    backend: Arc<dyn ApiBackend>,
    session_store: Arc<dyn SessionStore>,
}

impl AuthGateway {
    pub fn new(backend: Arc<dyn ApiBackend>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            backend,
            session_store,
        }
    }

    /// Sends the credentials.
    ///
    /// Empty fields are rejected locally with a `Validation` error. A non-2xx
    /// answer surfaces as `Authentication` carrying the backend's message.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::validation("Email and password are required"));
        }

        tracing::info!("[AuthGateway] Logging in as {}", email);
        let request = LoginRequest::new(email, password);
        match self.backend.login(&request).await {
            Ok(response) => {
                tracing::info!("[AuthGateway] Login accepted for user {}", response.user.id);
                Ok(response)
            }
            Err(e) => {
                tracing::warn!("[AuthGateway] Login rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Persists the session from a successful login and returns the
    /// post-login navigation.
    pub fn complete_login(&self, response: LoginResponse) -> Result<Navigation> {
        let session = response.into_session();
        self.session_store.save(&session)?;
        tracing::debug!("[AuthGateway] Session stored for user {}", session.user.id);
        Ok(Navigation::Redirect(Route::Dashboard))
    }

    /// Logs out.
    ///
    /// Backend notification is best effort. The local session is always
    /// cleared and the caller is always sent back to the login view.
    pub async fn logout(&self) -> Navigation {
        if let Err(e) = self.backend.logout().await {
            tracing::warn!("[AuthGateway] Backend logout failed, continuing: {}", e);
        }

        if let Err(e) = self.session_store.clear() {
            tracing::warn!("[AuthGateway] Failed to clear local session: {}", e);
        } else {
            tracing::info!("[AuthGateway] Session cleared");
        }

        Navigation::Redirect(Route::Login)
    }

    pub fn current_user(&self) -> Option<User> {
        self.session_store.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_store.is_authenticated()
    }
}
