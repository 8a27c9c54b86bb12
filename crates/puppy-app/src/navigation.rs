//! Two-state navigation controller
//!
//! `List --GoToDetail(id)--> Detail(id)` and `Detail(id) --Back--> List`.
//! The id is not checked against the catalog here; the detail view-model
//! degrades to an empty view when it does not resolve.

use puppy_core::{PuppyId, Route};
use tracing::{debug, trace};

/// Navigation intent emitted by the list screen or the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// A list tile was activated
    GoToDetail(PuppyId),
    /// Host back navigation
    Back,
}

/// What a navigation intent did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current route changed
    Moved,
    /// Back was requested on the start destination
    AtRoot,
    /// The intent has no transition from the current state
    Ignored,
}

/// Current destination plus the transition table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    /// Start on the list
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on an arbitrary route (deep link)
    pub fn at(route: Route) -> Self {
        Self { current: route }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn is_list(&self) -> bool {
        matches!(self.current, Route::List)
    }

    /// Apply an intent
    pub fn dispatch(&mut self, intent: NavIntent) -> Transition {
        match intent {
            NavIntent::GoToDetail(id) if self.is_list() => {
                debug!("Navigating to puppy {}", id);
                self.current = Route::detail(id);
                Transition::Moved
            }
            NavIntent::GoToDetail(id) => {
                trace!("Ignoring GoToDetail({}) while on {}", id, self.current);
                Transition::Ignored
            }
            NavIntent::Back if self.is_list() => Transition::AtRoot,
            NavIntent::Back => {
                debug!("Navigating back to list");
                self.current = Route::List;
                Transition::Moved
            }
        }
    }
}
