//! Application init

use crate::app::{App, Handler};
use crate::error::Result;
use crate::router::Route;
use crate::ui::{HomeWidget, LoginFormWidget};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io;

/// Initialize
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restore to normal state
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Main
async fn run_app(app: &mut App) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    while app.running {
        terminal.draw(|f| ui_render(f, app))?;

        // The loading state is on screen now; run the login it announced.
        if app.login_pending {
            Handler::submit_login(app).await?;
            continue;
        }

        if crossterm::event::poll(std::time::Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            Handler::handle_key(app, key)?;
        }
    }

    tracing::debug!("Application exiting");
    Ok(())
}

/// Render the UI frame.
fn ui_render(f: &mut Frame, app: &App) {
    let area = f.area();
    match app.current_route() {
        Some(Route::Login) => LoginFormWidget::render(&app.login_form, area, f.buffer_mut()),
        Some(Route::Home) => HomeWidget::render(
            app.profile.as_ref(),
            app.home_error.as_deref(),
            area,
            f.buffer_mut(),
        ),
        None => {}
    }
}

/// Start app.
pub async fn start(mut app: App) -> Result<()> {
    // Resolve the landing route before touching the terminal so a storage
    // failure is reported on a normal screen.
    let landing = app.start()?;
    tracing::debug!("Landing on {}", landing);

    setup_terminal()?;
    let res = run_app(&mut app).await;
    restore_terminal()?;

    res
}
