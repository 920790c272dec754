//! Session check for protected routes.

use std::sync::Arc;

use serde::Serialize;

use rucscope_core::navigation::{Navigation, Navigator, Route};
use rucscope_core::session::SessionStore;

/// Resolution state of a guarded view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "route", rename_all = "snake_case")]
pub enum GuardState {
    /// Not yet checked; nothing is rendered
    #[default]
    Unknown,
    Authorized,
    Redirecting(Route),
}

/// Result of activating a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuardActivation {
    pub route: Route,
    pub state: GuardState,
}

impl GuardActivation {
    /// An activation that has not been checked yet.
    pub fn pending(route: Route) -> Self {
        Self {
            route,
            state: GuardState::Unknown,
        }
    }

    /// The navigation the shell must perform for this activation.
    pub fn navigation(&self) -> Navigation {
        match self.state {
            GuardState::Redirecting(target) => Navigation::Redirect(target),
            GuardState::Unknown | GuardState::Authorized => Navigation::Stay,
        }
    }

    /// Only an authorized activation renders the protected content.
    pub fn renders_content(&self) -> bool {
        self.state == GuardState::Authorized
    }
}

/// Decides whether a route may be shown.
///
/// The session is read once per activation. A session cleared while a
/// protected view is showing is only noticed on the next navigation.
pub struct RouteGuard {
    session_store: Arc<dyn SessionStore>,
}

impl RouteGuard {
    pub fn new(session_store: Arc<dyn SessionStore>) -> Self {
        Self { session_store }
    }

    pub fn activate(&self, route: Route) -> GuardActivation {
        let mut activation = GuardActivation::pending(route);

        if !route.requires_session() {
            activation.state = GuardState::Authorized;
            return activation;
        }

        activation.state = if self.session_store.is_authenticated() {
            GuardState::Authorized
        } else {
            tracing::info!("[RouteGuard] No session for {}, redirecting to login", route.path());
            GuardState::Redirecting(Route::Login)
        };
        activation
    }

    /// Activates `route` and hands any redirect to `navigator`.
    pub fn enter(&self, route: Route, navigator: &dyn Navigator) -> GuardActivation {
        let activation = self.activate(route);
        navigator.apply(activation.navigation());
        activation
    }
}
