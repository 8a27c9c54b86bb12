//! One-line key hints for the current screen

use puppy_core::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct KeyHints<'a> {
    route: &'a Route,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(route: &'a Route, palette: &'a Palette) -> Self {
        Self { route, palette }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.route {
            Route::List => &[
                ("↑/↓", "Navigate"),
                ("Enter", "Open"),
                ("1-9", "Quick open"),
                ("q", "Quit"),
            ],
            Route::Detail(_) => &[("Esc", "Back"), ("q", "Quit")],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted(p)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(p.deepest_bg))
            .render(area, buf);
    }
}
