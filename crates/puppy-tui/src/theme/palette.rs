//! Color palettes for the dark and light themes.

use puppy_app::config::Theme;
use ratatui::style::Color;

/// Colors used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,

    // --- Top app bar ---
    pub bar_bg: Color,
    pub bar_fg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Accent ---
    pub accent: Color,
    pub selection_bg: Color,
    pub keybinding: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Black,
    card_bg: Color::Black,
    bar_bg: Color::Cyan,
    bar_fg: Color::Black,
    border_dim: Color::DarkGray,
    border_active: Color::Cyan,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,
    accent: Color::Cyan,
    selection_bg: Color::Rgb(30, 40, 48),
    keybinding: Color::Yellow,
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::White,
    card_bg: Color::Rgb(245, 245, 245),
    bar_bg: Color::Cyan,
    bar_fg: Color::Black,
    border_dim: Color::Gray,
    border_active: Color::Blue,
    text_primary: Color::Black,
    text_secondary: Color::DarkGray,
    text_muted: Color::Gray,
    accent: Color::Blue,
    selection_bg: Color::Rgb(220, 236, 244),
    keybinding: Color::Magenta,
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}
