use std::sync::Mutex;

use em_core::form::Route;
use em_core::ports::NavigationPort;

/// Records route changes; the terminal has a single screen, so "going" to a
/// route means the current flow is over.
#[derive(Default)]
pub struct TerminalNavigator {
    history: Mutex<Vec<Route>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> usize {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl NavigationPort for TerminalNavigator {
    fn go_to(&self, route: Route) {
        tracing::info!(route = %route, "navigate");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(route);
    }
}
