//! Keyboard event handling.

use super::state::App;
use crate::error::Result;
use crate::router::Route;
use crate::ui::widgets::login_form::REQUIRED_FIELDS_MESSAGE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error, info};

/// Handles keyboard input events.
pub struct Handler;

impl Handler {
    /// Process a keyboard event and update app state.
    ///
    /// # Errors
    /// Returns error if the session state cannot be read or cleared.
    pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Quit requested");
            app.running = false;
            return Ok(());
        }

        match app.current_route() {
            Some(Route::Login) => Self::handle_login_key(app, key),
            Some(Route::Home) => Self::handle_home_key(app, key),
            None => Ok(()),
        }
    }

    /// Handle keyboard input on the login screen.
    fn handle_login_key(app: &mut App, key: KeyEvent) -> Result<()> {
        let form = &mut app.login_form;
        if form.loading {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                info!("Quit requested");
                app.running = false;
            }
            KeyCode::Tab => {
                form.next_field();
            }
            KeyCode::BackTab => {
                form.prev_field();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.toggle_secret_visibility();
            }
            KeyCode::Char(c) => {
                form.input_char(c);
                form.error = None;
            }
            KeyCode::Backspace => {
                form.backspace();
                form.error = None;
            }
            KeyCode::Enter => {
                if !form.is_valid() {
                    form.error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
                    return Ok(());
                }
                debug!("Login submitted");
                form.error = None;
                form.loading = true;
                app.login_pending = true;
            }
            _ => {}
        }
        Ok(())
    }

    /// Run a submitted login. Called by the main loop after the loading state
    /// has been drawn.
    ///
    /// # Errors
    /// Returns error if the session state cannot be read after a successful login.
    pub async fn submit_login(app: &mut App) -> Result<()> {
        if !app.login_pending {
            return Ok(());
        }
        app.login_pending = false;

        let credentials = app.login_form.credentials();
        let outcome = app.auth.login(&credentials).await;
        app.login_form.loading = false;

        match outcome {
            Ok(response) if response.succeeded => {
                info!("Authentication successful");
                app.login_form.clear();
                app.profile = response.profile;
                app.navigate(Route::Home)?;
            }
            Ok(response) => {
                app.login_form.error = Some(response.message);
            }
            Err(e) => {
                error!("Failed to persist session: {}", e);
                app.login_form.error = Some(format!("Failed to save session: {}", e));
            }
        }
        Ok(())
    }

    /// Handle keyboard input on the home screen.
    ///
    /// A failed logout stays on the home screen with the error shown.
    fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                app.running = false;
            }
            KeyCode::Char('o') => {
                if let Err(e) = app.auth.logout() {
                    error!("Failed to clear session: {}", e);
                    app.home_error = Some(format!("Failed to clear session: {}", e));
                    return Ok(());
                }
                app.login_form.clear();
                app.navigate(Route::Login)?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthService, CredentialDirectory};
    use crate::error::AuthGateError;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::ui::widgets::login_form::LoginField;
    use std::time::Duration;

    fn app() -> App {
        let auth = AuthService::new(CredentialDirectory::builtin(), Box::new(MemoryStore::new()))
            .with_latency(Duration::ZERO);
        let mut app = App::new(auth);
        app.start().unwrap();
        app
    }

    /// Memory store that refuses to delete anything.
    #[derive(Debug, Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.0.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.set_item(key, value)
        }

        fn remove_item(&mut self, _key: &str) -> Result<()> {
            Err(AuthGateError::Storage("storage disabled".to_string()))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            Handler::handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn fill_form(app: &mut App, identifier: &str, secret: &str) {
        type_text(app, identifier);
        Handler::handle_key(app, key(KeyCode::Tab)).unwrap();
        type_text(app, secret);
    }

    #[tokio::test]
    async fn test_successful_login_navigates_home() {
        let mut app = app();
        fill_form(&mut app, "admin", "admin@1234");

        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.login_form.loading);
        assert!(app.login_pending);

        Handler::submit_login(&mut app).await.unwrap();

        assert_eq!(app.current_route(), Some(Route::Home));
        assert!(!app.login_pending);
        assert_eq!(app.profile.as_ref().unwrap().display_name, "Administrator");
        assert!(app.login_form.identifier.is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_shows_message() {
        let mut app = app();
        fill_form(&mut app, "admin", "wrongpassword");

        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        Handler::submit_login(&mut app).await.unwrap();

        assert_eq!(app.current_route(), Some(Route::Login));
        assert!(!app.login_form.loading);
        assert_eq!(
            app.login_form.error.as_deref(),
            Some("Invalid credentials. Please try again.")
        );
        assert!(!app.auth.is_authenticated().unwrap());
    }

    #[test]
    fn test_incomplete_form_is_not_submitted() {
        let mut app = app();
        type_text(&mut app, "admin");

        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(!app.login_pending);
        assert_eq!(app.login_form.error.as_deref(), Some(REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn test_typing_clears_error() {
        let mut app = app();
        app.login_form.error = Some("old".to_string());

        type_text(&mut app, "a");

        assert!(app.login_form.error.is_none());
    }

    #[test]
    fn test_ctrl_r_toggles_visibility_without_typing() {
        let mut app = app();
        Handler::handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.login_form.focus_field, LoginField::Secret);

        Handler::handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        )
        .unwrap();

        assert!(!app.login_form.is_secret_masked);
        assert!(app.login_form.secret.is_empty());
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut app = app();
        fill_form(&mut app, "admin", "admin@1234");
        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        type_text(&mut app, "x");

        assert_eq!(app.login_form.secret, "admin@1234");
    }

    #[tokio::test]
    async fn test_logout_returns_to_login() {
        let mut app = app();
        fill_form(&mut app, "admin", "admin@1234");
        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        Handler::submit_login(&mut app).await.unwrap();

        Handler::handle_key(&mut app, key(KeyCode::Char('o'))).unwrap();

        assert_eq!(app.current_route(), Some(Route::Login));
        assert!(app.profile.is_none());
        assert!(!app.auth.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn test_signed_in_user_cannot_reach_login() {
        let mut app = app();
        fill_form(&mut app, "admin", "admin@1234");
        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        Handler::submit_login(&mut app).await.unwrap();

        assert_eq!(app.navigate(Route::Login).unwrap(), Route::Home);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        Handler::handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.running);

        let mut app = self::app();
        Handler::handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let mut app = app();
        fill_form(&mut app, "admin", "wrong");
        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        Handler::submit_login(&mut app).await.unwrap();
        assert!(app.login_form.error.is_some());

        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.login_form.loading);
        assert!(app.login_form.error.is_none());
    }

    #[tokio::test]
    async fn test_logout_failure_stays_home_with_message() {
        let auth = AuthService::new(
            CredentialDirectory::builtin(),
            Box::new(ReadOnlyStore::default()),
        )
        .with_latency(Duration::ZERO);
        let mut app = App::new(auth);
        app.start().unwrap();
        fill_form(&mut app, "admin", "admin@1234");
        Handler::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        Handler::submit_login(&mut app).await.unwrap();
        assert_eq!(app.current_route(), Some(Route::Home));

        Handler::handle_key(&mut app, key(KeyCode::Char('o'))).unwrap();

        assert!(app.running);
        assert_eq!(app.current_route(), Some(Route::Home));
        assert!(
            app.home_error
                .as_deref()
                .unwrap()
                .starts_with("Failed to clear session")
        );
    }
}
