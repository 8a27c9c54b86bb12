//! Key event handlers for each screen

use puppy_core::Route;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::NavIntent;
use crate::state::AppState;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.route() {
        Route::List => handle_key_list(key),
        Route::Detail(_) => handle_key_detail(key),
    }
}

/// Handle key events on the list screen
fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::ActivateSelected),

        // Quick select: '1' is the first tile
        InputKey::Char(c @ '1'..='9') => {
            Some(Message::ActivateIndex((c as usize) - ('1' as usize)))
        }

        InputKey::Esc | InputKey::Backspace => Some(Message::Navigate(NavIntent::Back)),

        _ => None,
    }
}

/// Handle key events on the detail screen
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Esc
        | InputKey::Backspace
        | InputKey::Left
        | InputKey::Char('h')
        | InputKey::Char('b') => Some(Message::Navigate(NavIntent::Back)),

        _ => None,
    }
}
