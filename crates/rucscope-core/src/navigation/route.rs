//! Client-side routes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A view the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Route {
    /// Record lookup
    Home,
    Login,
    /// Audit log viewer
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Resolves a path to a route. Unknown paths fall back to `Home`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "/login" | "login" => Self::Login,
            "/dashboard" | "dashboard" => Self::Dashboard,
            _ => Self::Home,
        }
    }

    /// True for views that need an active session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_path_round_trips_known_routes() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
    }

    #[test]
    fn test_only_dashboard_is_guarded() {
        let guarded: Vec<Route> = Route::iter().filter(Route::requires_session).collect();
        assert_eq!(guarded, vec![Route::Dashboard]);
    }
}
