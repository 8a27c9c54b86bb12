//! View-models: pure projections from the catalog to renderable data
//!
//! - `list`: summary tiles for the list screen
//! - `detail`: the full record for the detail screen, or empty

pub mod detail;
pub mod list;

pub use detail::{DetailView, DetailViewModel, PuppyDetail};
pub use list::{ListViewModel, SummaryTile};

use puppy_core::{Catalog, Route};
use serde::Serialize;

/// Whatever the current route renders to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "view", rename_all = "snake_case")]
pub enum ScreenView {
    List(Vec<SummaryTile>),
    Detail(DetailView),
}

impl ScreenView {
    pub fn for_route(catalog: &Catalog, route: &Route) -> Self {
        match route {
            Route::List => ScreenView::List(ListViewModel::render(catalog)),
            Route::Detail(arg) => ScreenView::Detail(DetailViewModel::render_arg(catalog, arg)),
        }
    }
}
