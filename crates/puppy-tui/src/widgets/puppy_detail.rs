//! Detail screen: the full record of one puppy

use puppy_app::{DetailView, PuppyDetail};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::portrait::{portrait, PORTRAIT_HEIGHT};
use crate::theme::{styles, Palette};

pub struct PuppyDetailCard<'a> {
    view: &'a DetailView,
    palette: &'a Palette,
}

impl<'a> PuppyDetailCard<'a> {
    pub fn new(view: &'a DetailView, palette: &'a Palette) -> Self {
        Self { view, palette }
    }
}

impl Widget for PuppyDetailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.view {
            DetailView::Puppy(detail) => render_detail(detail, self.palette, area, buf),
            // Unresolved ids render nothing
            DetailView::Empty => {}
        }
    }
}

fn render_detail(detail: &PuppyDetail, p: &Palette, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(p, false);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let [art_area, name_area, age_area, desc_area] = Layout::vertical([
        Constraint::Length(PORTRAIT_HEIGHT + 1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(inner);

    let art: Vec<Line> = portrait(&detail.image)
        .iter()
        .map(|row| Line::styled(format!("  {row}"), styles::accent(p)))
        .collect();
    Paragraph::new(art).render(art_area, buf);

    field_row("Name:", detail.name.clone(), p).render(name_area, buf);
    field_row("Age:", detail.age.to_string(), p).render(age_area, buf);

    Paragraph::new(Line::styled(
        format!(" {}", detail.description),
        styles::text_secondary(p),
    ))
    .wrap(Wrap { trim: false })
    .render(desc_area, buf);
}

fn field_row(label: &'static str, value: String, p: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(format!(" {label}"), styles::label(p)),
        Span::raw("  "),
        Span::styled(value, styles::text_primary(p)),
    ]))
}
