//! Main render/view function (View in TEA pattern)


use puppy_app::{AppState, DetailView, ScreenView};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::Palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn comes from the
/// view-model projection of the current route.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.settings.ui.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.deepest_bg)),
        area,
    );

    let areas = layout::create(area);
    let screen = state.screen();

    let subtitle = match &screen {
        ScreenView::Detail(DetailView::Puppy(detail)) => Some(detail.name.as_str()),
        _ => None,
    };
    frame.render_widget(
        widgets::TopAppBar::new(&state.settings.ui.title, palette).subtitle(subtitle),
        areas.header,
    );

    match &screen {
        ScreenView::List(tiles) => {
            frame.render_widget(
                widgets::PuppyList::new(tiles, state.selected, palette),
                areas.content,
            );
        }
        ScreenView::Detail(detail) => {
            frame.render_widget(widgets::PuppyDetailCard::new(detail, palette), areas.content);
        }
    }

    frame.render_widget(widgets::KeyHints::new(state.route(), palette), areas.footer);
}
