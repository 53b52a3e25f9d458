//! Navigation between the login and home screens.
//!
//! Every transition goes through [`guard::decide`] with the current session
//! state, and redirects are followed until the guard admits a route.

pub mod guard;

pub use guard::{GuardDecision, decide};

use crate::auth::AuthService;
use crate::error::{AuthGateError, Result};
use std::fmt;
use tracing::debug;

/// Upper bound on chained redirects for a single navigation.
const MAX_REDIRECTS: usize = 4;

/// Screens known to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

/// Admission annotations for a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/",
        }
    }

    pub fn meta(self) -> RouteMeta {
        match self {
            Route::Login => RouteMeta {
                requires_auth: false,
                requires_guest: true,
            },
            Route::Home => RouteMeta {
                requires_auth: true,
                requires_guest: false,
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the current route; the guard runs before every change.
#[derive(Debug)]
pub struct Router {
    current: Option<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The active route, `None` before the first navigation.
    pub fn current(&self) -> Option<Route> {
        self.current
    }

    /// Navigate to `target`, following guard redirects.
    ///
    /// Returns the route actually reached.
    ///
    /// # Errors
    /// Returns error if the session state cannot be read, or if redirects do
    /// not settle.
    pub fn navigate(&mut self, target: Route, auth: &AuthService) -> Result<Route> {
        let authenticated = auth.is_authenticated()?;
        let mut next = target;

        for _ in 0..=MAX_REDIRECTS {
            match decide(next.meta(), authenticated) {
                GuardDecision::Allow => {
                    debug!("Navigated to {}", next);
                    self.current = Some(next);
                    return Ok(next);
                }
                GuardDecision::Redirect(to) => {
                    debug!("Guard redirected {} -> {}", next, to);
                    next = to;
                }
            }
        }

        Err(AuthGateError::RedirectLoop(MAX_REDIRECTS))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CredentialDirectory, Credentials};
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::time::Duration;

    fn service(store: MemoryStore) -> AuthService {
        AuthService::new(CredentialDirectory::builtin(), Box::new(store))
            .with_latency(Duration::ZERO)
    }

    #[test]
    fn test_route_table() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Home.path(), "/");
        assert!(Route::Login.meta().requires_guest);
        assert!(Route::Home.meta().requires_auth);
    }

    #[test]
    fn test_unauthenticated_home_redirects_to_login() {
        let auth = service(MemoryStore::new());
        let mut router = Router::new();

        let reached = router.navigate(Route::Home, &auth).unwrap();

        assert_eq!(reached, Route::Login);
        assert_eq!(router.current(), Some(Route::Login));
    }

    #[test]
    fn test_unauthenticated_login_allowed() {
        let auth = service(MemoryStore::new());
        let mut router = Router::new();

        assert_eq!(router.navigate(Route::Login, &auth).unwrap(), Route::Login);
    }

    #[tokio::test]
    async fn test_authenticated_login_redirects_home() {
        let mut auth = service(MemoryStore::new());
        let response = auth
            .login(&Credentials::new("admin", "admin@1234"))
            .await
            .unwrap();
        assert!(response.succeeded);
        let mut router = Router::new();

        assert_eq!(router.navigate(Route::Login, &auth).unwrap(), Route::Home);
        assert_eq!(router.navigate(Route::Home, &auth).unwrap(), Route::Home);
    }

    #[test]
    fn test_stored_session_admits_home() {
        let mut store = MemoryStore::new();
        store.set_item("isAuthenticated", "true").unwrap();
        let auth = service(store);
        let mut router = Router::new();

        assert_eq!(router.navigate(Route::Home, &auth).unwrap(), Route::Home);
    }

    #[tokio::test]
    async fn test_logout_then_home_redirects() {
        let mut auth = service(MemoryStore::new());
        auth.login(&Credentials::new("admin", "admin@1234"))
            .await
            .unwrap();
        let mut router = Router::new();
        router.navigate(Route::Home, &auth).unwrap();

        auth.logout().unwrap();

        assert_eq!(router.navigate(Route::Home, &auth).unwrap(), Route::Login);
    }

    #[test]
    fn test_guard_performs_no_writes() {
        let auth = service(MemoryStore::new());
        let mut router = Router::new();
        router.navigate(Route::Home, &auth).unwrap();
        router.navigate(Route::Login, &auth).unwrap();
        assert!(!auth.is_authenticated().unwrap());
        assert!(auth.current_user().unwrap().is_none());
    }
}
