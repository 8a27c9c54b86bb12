//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::navigation::NavIntent;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the host
    Key(InputKey),

    /// Quit immediately (q, Ctrl+C)
    Quit,

    // ─────────────────────────────────────────────────────────
    // List Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Move the list cursor down one tile
    SelectNext,
    /// Move the list cursor up one tile
    SelectPrevious,
    /// Jump to the first tile
    SelectFirst,
    /// Jump to the last tile
    SelectLast,
    /// Activate the tile under the cursor
    ActivateSelected,
    /// Activate the tile at a position (quick select, 0-based)
    ActivateIndex(usize),

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Navigation intent for the controller
    Navigate(NavIntent),
}
