//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::navigation::{NavIntent, Transition};
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext if state.navigator.is_list() => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious if state.navigator.is_list() => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst if state.navigator.is_list() => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast if state.navigator.is_list() => {
            state.select_last();
            UpdateResult::none()
        }
        Message::ActivateSelected if state.navigator.is_list() => match state.selected_tile() {
            Some(tile) => UpdateResult::message(Message::Navigate(tile.activate())),
            None => UpdateResult::none(),
        },
        Message::ActivateIndex(index) if state.navigator.is_list() => {
            if state.select_index(index) {
                UpdateResult::message(Message::ActivateSelected)
            } else {
                debug!("No tile at position {}", index);
                UpdateResult::none()
            }
        }
        Message::SelectNext
        | Message::SelectPrevious
        | Message::SelectFirst
        | Message::SelectLast
        | Message::ActivateSelected
        | Message::ActivateIndex(_) => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(intent) => handle_navigate(state, intent),
    }
}

fn handle_navigate(state: &mut AppState, intent: NavIntent) -> UpdateResult {
    match state.navigator.dispatch(intent) {
        Transition::Moved => {
            if let NavIntent::GoToDetail(id) = intent {
                if let Some(index) = state.catalog.position_of(id) {
                    state.selected = index;
                }
            }
            UpdateResult::none()
        }
        Transition::AtRoot if state.settings.behavior.back_quits_at_root => {
            UpdateResult::message(Message::Quit)
        }
        Transition::AtRoot | Transition::Ignored => UpdateResult::none(),
    }
}
