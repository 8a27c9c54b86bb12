//! Top app bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Palette;

/// Title bar shown above every screen
pub struct TopAppBar<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> TopAppBar<'a> {
    pub fn new(title: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            subtitle: None,
            palette,
        }
    }

    /// Secondary text after the title (the open puppy's name)
    pub fn subtitle(mut self, subtitle: Option<&'a str>) -> Self {
        self.subtitle = subtitle;
        self
    }
}

impl Widget for TopAppBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default()
            .bg(self.palette.bar_bg)
            .fg(self.palette.bar_fg);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(bar_style)
            .style(bar_style);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.title, bar_style.add_modifier(Modifier::BOLD)),
        ];
        if let Some(subtitle) = self.subtitle {
            spans.push(Span::styled(" › ", bar_style));
            spans.push(Span::styled(subtitle, bar_style));
        }

        Paragraph::new(vec![Line::default(), Line::from(spans)])
            .block(block)
            .render(area, buf);
    }
}
