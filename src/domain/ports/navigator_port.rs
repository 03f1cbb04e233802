//! Navigation port definition.

use crate::domain::route::Route;

/// Port for reading and changing the current route.
pub trait NavigatorPort {
    /// Returns the active route.
    fn current(&self) -> &Route;

    /// Navigates to `route`.
    fn push(&mut self, route: Route);

    /// Returns a named parameter of the active route.
    fn param(&self, name: &str) -> Option<&str> {
        self.current().param(name)
    }
}
