//! Headless mode: print the current screen as JSON instead of drawing it

use std::io::Write;

use puppy_app::AppState;
use puppy_core::prelude::*;
use serde_json::json;

/// Write `{"route": ..., "screen": ..., "view": ...}` for the current route
pub fn write_screen<W: Write>(out: &mut W, state: &AppState) -> Result<()> {
    let screen = serde_json::to_value(state.screen())?;
    let mut doc = json!({ "route": state.route().path() });
    if let (Some(doc), Some(screen)) = (doc.as_object_mut(), screen.as_object()) {
        doc.extend(screen.clone());
    }
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
