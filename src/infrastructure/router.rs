//! In-app navigation history.

use tracing::debug;

use crate::domain::ports::NavigatorPort;
use crate::domain::route::Route;

/// History stack backing [`NavigatorPort`].
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
    current: Route,
}

impl Router {
    /// Starts at `initial`.
    #[must_use]
    pub const fn new(initial: Route) -> Self {
        Self {
            history: Vec::new(),
            current: initial,
        }
    }

    /// Returns to the previous route, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "Navigating back");
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl NavigatorPort for Router {
    fn current(&self) -> &Route {
        &self.current
    }

    /// Pushing the route right behind the current one unwinds to it.
    fn push(&mut self, route: Route) {
        if self.history.last() == Some(&route) {
            self.back();
            return;
        }
        debug!(from = %self.current, to = %route, "Navigating");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }
}
