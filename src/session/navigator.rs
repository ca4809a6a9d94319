//! Explicit navigation.
//!
//! The browser original moved between pages through `window.location` side
//! effects. Here every destination is a typed route and every transition goes
//! through a `Navigator`, so controllers can redirect (login on 401, dashboard
//! by role) without knowing what a "page" is to the embedding application.

use std::fmt;

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    AdminDashboard,
    ApplicantDashboard,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Login => "login",
            Self::AdminDashboard => "admin dashboard",
            Self::ApplicantDashboard => "applicant dashboard",
        };
        f.write_str(s)
    }
}

pub trait Navigator: Send + Sync {
    fn go(&self, route: Route);
    fn current(&self) -> Route;
}

/// Navigator for the CLI: remembers where the user "is" and logs transitions.
/// Every process starts at the login entry point, like a fresh browser tab.
pub struct CliNavigator {
    current: Mutex<Route>,
}

impl CliNavigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Route::Login),
        }
    }
}

impl Default for CliNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for CliNavigator {
    fn go(&self, route: Route) {
        *self.current.lock() = route;
        tracing::info!(%route, "navigating");
    }

    fn current(&self) -> Route {
        *self.current.lock()
    }
}

/// Captures every transition for assertions.
pub struct RecordingNavigator {
    current: Mutex<Route>,
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn starting_at(route: Route) -> Self {
        Self {
            current: Mutex::new(route),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn new() -> Self {
        Self::starting_at(Route::Login)
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().clone()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn go(&self, route: Route) {
        *self.current.lock() = route;
        self.visited.lock().push(route);
    }

    fn current(&self) -> Route {
        *self.current.lock()
    }
}
