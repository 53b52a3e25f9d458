pub mod home;
pub mod login_form;

pub use home::HomeWidget;
pub use login_form::{LoginForm, LoginFormWidget};

use ratatui::{prelude::*, widgets::Paragraph};

/// Hands out one-row rects inside `area`, dropping rows that do not fit.
pub(crate) struct LineCursor {
    area: Rect,
    y: u16,
}

impl LineCursor {
    pub(crate) fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    pub(crate) fn put(&mut self, paragraph: Paragraph<'_>, buf: &mut Buffer) {
        if self.y < self.area.bottom() {
            let row = Rect {
                x: self.area.x,
                y: self.y,
                width: self.area.width,
                height: 1,
            };
            paragraph.render(row, buf);
        }
        self.y = self.y.saturating_add(1);
    }

    pub(crate) fn skip(&mut self) {
        self.y = self.y.saturating_add(1);
    }
}
