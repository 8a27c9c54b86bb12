//! puppy-app - Application state, view-models and navigation
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management. The list and detail view-models are pure projections over the
//! catalog; the navigation controller is a two-state router between them.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod state;
pub mod view_model;

// Re-export primary types
pub use handler::{process, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{NavIntent, Navigator, Transition};
pub use state::{AppPhase, AppState};
pub use view_model::{
    DetailView, DetailViewModel, ListViewModel, PuppyDetail, ScreenView, SummaryTile,
};
