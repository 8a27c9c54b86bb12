//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

/// Bold field label ("Name:", "Age:")
pub fn label(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.keybinding)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

/// Highlighted list tile
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .bg(p.selection_bg)
        .add_modifier(Modifier::BOLD)
}

// --- Containers ---

/// Rounded card container
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    let border = if focused {
        p.border_active
    } else {
        p.border_dim
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(p.card_bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_label_is_bold() {
        assert!(label(&DARK).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_selected_uses_selection_bg() {
        assert_eq!(selected(&LIGHT).bg, Some(LIGHT.selection_bg));
    }

    #[test]
    fn test_text_styles_follow_palette() {
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_secondary(&DARK).fg, Some(DARK.text_secondary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
        assert_eq!(accent(&LIGHT).fg, Some(LIGHT.accent));
    }
}
