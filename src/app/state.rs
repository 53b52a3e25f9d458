//! Application state.

use crate::auth::{AuthService, UserProfile};
use crate::error::Result;
use crate::router::{Route, Router};
use crate::ui::LoginForm;
use tracing::debug;

/// Everything the TUI loop renders and mutates.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    /// The single authentication service for this process
    pub auth: AuthService,
    pub router: Router,
    pub login_form: LoginForm,
    /// Profile shown on the home screen
    pub profile: Option<UserProfile>,
    /// A submitted login waiting to be run by the main loop
    pub login_pending: bool,
    /// Error shown on the home screen, e.g. a failed logout
    pub home_error: Option<String>,
}

impl App {
    pub fn new(auth: AuthService) -> Self {
        Self {
            running: true,
            auth,
            router: Router::new(),
            login_form: LoginForm::new(),
            profile: None,
            login_pending: false,
            home_error: None,
        }
    }

    /// Initial navigation: aim for home and let the guard decide.
    pub fn start(&mut self) -> Result<Route> {
        self.navigate(Route::Home)
    }

    /// Navigate through the guard and refresh what the landing screen shows.
    pub fn navigate(&mut self, target: Route) -> Result<Route> {
        let reached = self.router.navigate(target, &self.auth)?;
        self.home_error = None;
        match reached {
            Route::Home => {
                if let Some(profile) = self.auth.current_user()? {
                    self.profile = Some(profile);
                }
            }
            Route::Login => {
                self.profile = None;
            }
        }
        debug!("Current route: {}", reached);
        Ok(reached)
    }

    pub fn current_route(&self) -> Option<Route> {
        self.router.current()
    }
}
