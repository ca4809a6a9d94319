//! Session lifecycle: one bearer token, explicit navigation.

pub mod navigator;
pub mod store;

use std::sync::Arc;

pub use navigator::{CliNavigator, Navigator, RecordingNavigator, Route};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

use crate::error::ApiResult;

/// Cheap-to-clone handle bundling token storage with navigation.
///
/// Invariant: at most one token is held at a time; `expire` is the single
/// path for the forced-logout reaction to a 401.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> ApiResult<()> {
        self.store.store(token)
    }

    pub fn clear_token(&self) -> ApiResult<()> {
        self.store.clear()
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.go(route);
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Forced logout on session expiry: drop the token and send the user to
    /// the login entry point, unless they are already there.
    pub fn expire(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear token on session expiry");
        }
        if self.navigator.current() != Route::Login {
            self.navigator.go(Route::Login);
        }
    }
}
