//! List screen: one card per puppy

use puppy_app::SummaryTile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use super::portrait::portrait;
use crate::theme::{styles, Palette};

/// Quick-select digits only reach the first nine tiles
const MAX_QUICK_SELECT: usize = 9;

pub struct PuppyList<'a> {
    tiles: &'a [SummaryTile],
    selected: usize,
    palette: &'a Palette,
}

impl<'a> PuppyList<'a> {
    pub fn new(tiles: &'a [SummaryTile], selected: usize, palette: &'a Palette) -> Self {
        Self {
            tiles,
            selected,
            palette,
        }
    }

    fn tile_item(&self, index: usize, tile: &'a SummaryTile) -> ListItem<'a> {
        let p = self.palette;
        let mut lines: Vec<Line> = portrait(&tile.image)
            .iter()
            .map(|row| Line::styled(format!("  {row}"), styles::accent(p)))
            .collect();

        let badge = if index < MAX_QUICK_SELECT {
            format!("  [{}] ", index + 1)
        } else {
            "      ".to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(badge, styles::keybinding(p)),
            Span::styled(tile.name.as_str(), styles::text_primary(p)),
        ]));
        lines.push(Line::default());

        ListItem::new(lines)
    }
}

impl Widget for PuppyList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, true).title(Span::styled(
            format!(" {} puppies ", self.tiles.len()),
            styles::text_secondary(self.palette),
        ));

        let items: Vec<ListItem> = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| self.tile_item(i, tile))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().bg(self.palette.card_bg))
            .highlight_style(styles::selected(self.palette))
            .highlight_symbol("▌");

        let mut state = ListState::default();
        if !self.tiles.is_empty() {
            state.select(Some(self.selected.min(self.tiles.len() - 1)));
        }

        StatefulWidget::render(list, area, buf, &mut state);
    }
}
