//! Navigation outcomes and the collaborator that performs them.

use serde::{Deserialize, Serialize};

use super::Route;

/// What the shell should do after an operation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "route", rename_all = "snake_case")]
pub enum Navigation {
    /// Keep showing the current view
    Stay,
    /// Replace the current view with `route`
    Redirect(Route),
}

impl Navigation {
    /// The redirect target, if any.
    pub fn target(&self) -> Option<Route> {
        match self {
            Self::Stay => None,
            Self::Redirect(route) => Some(*route),
        }
    }
}

/// Performs navigation on behalf of every component.
pub trait Navigator: Send + Sync {
    /// Shows `route`, replacing the current view.
    fn navigate(&self, route: Route);

    /// Applies an outcome returned by a component.
    fn apply(&self, navigation: Navigation) {
        if let Some(route) = navigation.target() {
            self.navigate(route);
        }
    }
}
