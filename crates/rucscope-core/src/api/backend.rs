//! Backend API trait.

use async_trait::async_trait;

use crate::api::{LoginRequest, LoginResponse};
use crate::audit_log::{LogPage, LogQuery};
use crate::error::Result;
use crate::lookup::{IdentifierKind, LookupResult};

/// The HTTP backend, one method per endpoint.
///
/// Implementations own every transport concern (base URL, JSON bodies, the
/// bearer header, the cookie jar, timeouts) and translate HTTP failures into
/// [`ClientError`](crate::ClientError):
///
/// - no response → `Network`
/// - 401/403 → `Authentication`
/// - other non-2xx → `Server` with the backend's `error` message when present
///
/// Methods taking a `token` send `Authorization: Bearer <token>` when it is
/// `Some` and no authorization header otherwise.
#[async_trait]
pub trait ApiBackend: Send + Sync {
    /// `POST /api/auth/login`. Any non-2xx answer is an `Authentication`
    /// error.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// `POST /api/auth/logout`, relying on the session cookie.
    async fn logout(&self) -> Result<()>;

    /// `GET /api/logs` with the query's parameters.
    async fn list_logs(&self, token: Option<&str>, query: &LogQuery) -> Result<LogPage>;

    /// `GET /api/ruc/{id}` or `GET /api/ruc/dni/{id}` depending on `kind`.
    async fn lookup(
        &self,
        token: Option<&str>,
        kind: IdentifierKind,
        identifier: &str,
    ) -> Result<LookupResult>;
}
