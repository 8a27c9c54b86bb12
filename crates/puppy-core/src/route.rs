//! Text-encoded navigation routes
//!
//! Routes travel as paths (`"list"`, `"details/{id}"`). The detail argument
//! is kept as text; the detail view-model parses it when rendering.

use std::fmt;

use crate::error::{Error, Result};
use crate::puppy::PuppyId;

pub const LIST_PATH: &str = "list";
pub const DETAIL_PREFIX: &str = "details/";

/// A navigable destination
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The puppy list (start destination)
    #[default]
    List,
    /// Detail screen with the raw id argument
    Detail(String),
}

impl Route {
    /// Detail route for a known id
    pub fn detail(id: PuppyId) -> Self {
        Route::Detail(id.to_string())
    }

    /// Encode as a path
    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Detail(arg) => format!("{DETAIL_PREFIX}{arg}"),
        }
    }

    /// Decode a path. Only the route shape is checked; the detail argument
    /// is accepted as-is.
    pub fn from_path(path: &str) -> Result<Self> {
        if path == LIST_PATH {
            return Ok(Route::List);
        }
        match path.strip_prefix(DETAIL_PREFIX) {
            Some(arg) if !arg.contains('/') => Ok(Route::Detail(arg.to_string())),
            _ => Err(Error::invalid_route(path)),
        }
    }

    /// Parsed detail id, if this is a detail route with a numeric argument
    pub fn detail_id(&self) -> Option<PuppyId> {
        match self {
            Route::List => None,
            Route::Detail(arg) => PuppyId::parse(arg),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
