//! Application state (Model in TEA pattern)

use puppy_core::{Catalog, Route};

use crate::config::Settings;
use crate::navigation::Navigator;
use crate::view_model::{ListViewModel, ScreenView, SummaryTile};

/// Overall application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Read-only puppy catalog
    pub catalog: &'static Catalog,

    /// Current destination
    pub navigator: Navigator,

    /// Cursor position on the list screen
    pub selected: usize,

    pub phase: AppPhase,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Built-in catalog, default settings, list screen
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            catalog: Catalog::builtin(),
            navigator: Navigator::new(),
            selected: 0,
            phase: AppPhase::Running,
            settings,
        }
    }

    /// Open on `route` instead of the list
    pub fn starting_at(mut self, route: Route) -> Self {
        if let Some(index) = route.detail_id().and_then(|id| self.catalog.position_of(id)) {
            self.selected = index;
        }
        self.navigator = Navigator::at(route);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Render the current route through its view-model
    pub fn screen(&self) -> ScreenView {
        ScreenView::for_route(self.catalog, self.route())
    }

    pub fn tiles(&self) -> Vec<SummaryTile> {
        ListViewModel::render(self.catalog)
    }

    /// Tile under the list cursor
    pub fn selected_tile(&self) -> Option<SummaryTile> {
        self.tiles().into_iter().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.catalog.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.catalog.len().saturating_sub(1);
    }

    /// Move the cursor to `index` if it is in range
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.catalog.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }
}
