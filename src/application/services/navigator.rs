//! Stack based screen router.

use tracing::debug;

use crate::domain::Route;

/// Navigation stack. The bottom entry is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates navigator starting at the login route.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(Route::Login)
    }

    /// Creates navigator with a custom root.
    #[must_use]
    pub fn with_root(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Returns the route on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Route {
        // The stack always holds the root entry.
        &self.stack[self.stack.len() - 1]
    }

    /// Returns number of stacked routes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns whether a previous route exists.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Pushes a route.
    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.current(), to = %route, "Navigate");
        self.stack.push(route);
    }

    /// Pops the top route. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            debug!(route = %self.current(), "Back ignored at root");
            return false;
        }
        let popped = self.stack.pop();
        debug!(from = ?popped, to = %self.current(), "Back");
        true
    }

    /// Replaces the whole stack with a single route.
    pub fn reset(&mut self, route: Route) {
        debug!(to = %route, discarded = self.stack.len(), "Reset navigation");
        self.stack.clear();
        self.stack.push(route);
    }
}
