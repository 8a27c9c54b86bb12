//! # puppy-core - Core Domain Types
//!
//! Foundation crate for the puppy catalog. Provides the puppy record, the
//! built-in catalog, route encoding, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`puppy`)
//! - [`Puppy`] - Immutable puppy record
//! - [`PuppyId`] - Catalog-unique identifier
//! - [`ImageRef`] - Opaque display asset handle
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Ordered, read-only puppy collection
//!
//! ### Routes (`route`)
//! - [`Route`] - `list` / `details/{id}` destinations and their text encoding
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use puppy_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod puppy;
pub mod route;

/// Prelude for common imports used throughout all puppy crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::Catalog;
pub use error::{Error, Result, ResultExt};
pub use puppy::{ImageRef, Puppy, PuppyId};
pub use route::Route;
