//! Terminal implementation of [`Navigator`].

use std::sync::Mutex;

use colored::Colorize;

use rucscope_core::navigation::{Navigator, Route};

/// Tracks the current view and tells the user where they were sent.
pub struct TerminalNavigator {
    current: Mutex<Route>,
}

impl TerminalNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn current(&self) -> Route {
        match self.current.lock() {
            Ok(route) => *route,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!("[Navigator] -> {}", route.path());
        match self.current.lock() {
            Ok(mut current) => *current = route,
            Err(poisoned) => *poisoned.into_inner() = route,
        }
        eprintln!("{}", format!("-> {}", route.path()).bright_black());
    }
}
