//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each screen

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::state::AppState;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Run `message` and every follow-up it produces
pub fn process(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = update(state, msg).message;
    }
}
