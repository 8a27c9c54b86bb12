//! Initial state construction

use std::path::Path;

use puppy_app::config::load_settings;
use puppy_app::AppState;
use puppy_core::prelude::*;
use puppy_core::Route;

/// Settings from `config_dir`, opened on `route` (the list when `None`).
///
/// An unknown route shape is an error; a detail route whose id does not
/// resolve is accepted and renders an empty detail screen.
pub fn build_state(route: Option<&str>, config_dir: &Path) -> Result<AppState> {
    let settings = load_settings(config_dir);
    info!(
        "Loaded settings: title={:?} theme={}",
        settings.ui.title, settings.ui.theme
    );

    let route = match route {
        Some(path) => Route::from_path(path)?,
        None => Route::List,
    };

    Ok(AppState::with_settings(settings).starting_at(route))
}
