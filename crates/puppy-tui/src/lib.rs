//! puppy-tui - Terminal UI for the puppy catalog
//!
//! This crate provides the ratatui-based host UI. It renders the list and
//! detail view-models from puppy-app and feeds terminal key events back into
//! the TEA update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
