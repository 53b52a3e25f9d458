//! Home screen shown to signed-in users.

use super::LineCursor;
use crate::auth::UserProfile;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HomeWidget;

impl HomeWidget {
    pub fn render(
        profile: Option<&UserProfile>,
        error: Option<&str>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let width = 50.min(area.width);
        let height = 11.min(area.height);

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);
        Block::default()
            .borders(Borders::ALL)
            .title("Home")
            .render(popup_area, buf);

        let inner = Rect {
            x: popup_area.x + 1,
            y: popup_area.y + 1,
            width: popup_area.width.saturating_sub(2),
            height: popup_area.height.saturating_sub(2),
        };
        let mut lines = LineCursor::new(inner);

        let greeting = match profile {
            Some(p) => format!("Welcome, {}", p.display_name),
            None => "Welcome".to_string(),
        };
        lines.put(Paragraph::new(greeting).bold(), buf);

        if let Some(p) = profile {
            lines.put(
                Paragraph::new(format!("Signed in as {}", p.identifier))
                    .style(Style::default().dim()),
                buf,
            );
        }
        lines.skip();

        lines.put(Paragraph::new("You are logged in."), buf);
        lines.skip();

        if let Some(error) = error {
            lines.put(
                Paragraph::new(error).style(Style::default().fg(Color::Red)),
                buf,
            );
            lines.skip();
        }

        lines.put(
            Paragraph::new("o: Logout | q: Quit").style(Style::default().dim()),
            buf,
        );
    }
}
