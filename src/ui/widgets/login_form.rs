//! Login form widget.

use super::LineCursor;
use crate::auth::Credentials;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Login form state.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub identifier: String,
    pub secret: String,
    pub focus_field: LoginField,
    pub error: Option<String>,
    pub is_secret_masked: bool,
    /// Set while a submitted login is awaiting its response
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Identifier,
    Secret,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            identifier: String::new(),
            secret: String::new(),
            focus_field: LoginField::Identifier,
            error: None,
            is_secret_masked: true,
            loading: false,
        }
    }

    /// Move focus to the other field. With two fields forward and back coincide.
    pub fn next_field(&mut self) {
        self.focus_field = match self.focus_field {
            LoginField::Identifier => LoginField::Secret,
            LoginField::Secret => LoginField::Identifier,
        };
    }

    pub fn prev_field(&mut self) {
        self.next_field();
    }

    /// Add a character to the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.focus_field {
            LoginField::Identifier => self.identifier.push(c),
            LoginField::Secret => self.secret.push(c),
        }
    }

    /// Remove the last character from the focused field.
    pub fn backspace(&mut self) {
        match self.focus_field {
            LoginField::Identifier => {
                self.identifier.pop();
            }
            LoginField::Secret => {
                self.secret.pop();
            }
        }
    }

    /// Submit is enabled only when both fields are filled.
    pub fn is_valid(&self) -> bool {
        !self.identifier.is_empty() && !self.secret.is_empty()
    }

    pub fn toggle_secret_visibility(&mut self) {
        self.is_secret_masked = !self.is_secret_masked;
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.identifier.clone(), self.secret.clone())
    }

    pub fn submit_label(&self) -> &str {
        if self.loading { "Loading..." } else { "Sign In" }
    }

    fn display_secret(&self) -> String {
        if self.is_secret_masked {
            "*".repeat(self.secret.chars().count())
        } else {
            self.secret.clone()
        }
    }

    /// Reset to a blank form.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LoginFormWidget;

impl LoginFormWidget {
    pub fn render(form: &LoginForm, area: Rect, buf: &mut Buffer) {
        let width = 50.min(area.width);
        let height = 20.min(area.height);

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);
        Block::default()
            .borders(Borders::ALL)
            .title("Welcome Back")
            .render(popup_area, buf);

        let inner = Rect {
            x: popup_area.x + 1,
            y: popup_area.y + 1,
            width: popup_area.width.saturating_sub(2),
            height: popup_area.height.saturating_sub(2),
        };
        let mut lines = LineCursor::new(inner);

        lines.put(
            Paragraph::new("Sign in to your account").style(Style::default().dim()),
            buf,
        );
        lines.skip();

        if let Some(error) = &form.error {
            lines.put(
                Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
                buf,
            );
            lines.skip();
        }

        lines.put(
            Paragraph::new(format!("Identifier: {}", form.identifier))
                .style(field_style(form.focus_field == LoginField::Identifier)),
            buf,
        );
        lines.skip();

        lines.put(
            Paragraph::new(format!("Password: {}", form.display_secret()))
                .style(field_style(form.focus_field == LoginField::Secret)),
            buf,
        );
        lines.skip();

        let submit_style = if form.is_valid() && !form.loading {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().dim()
        };
        lines.put(
            Paragraph::new(format!("[ {} ]", form.submit_label()))
                .alignment(Alignment::Center)
                .style(submit_style),
            buf,
        );
        lines.skip();

        lines.put(Paragraph::new("Demo credentials:").style(Style::default().dim()), buf);
        lines.put(
            Paragraph::new("admin / admin@1234").style(Style::default().dim()),
            buf,
        );
        lines.skip();

        for instruction in [
            "Tab: Switch field | Ctrl+R: Show password",
            "Enter: Sign in | Esc: Quit",
        ] {
            lines.put(Paragraph::new(instruction).style(Style::default().dim()), buf);
        }
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}
