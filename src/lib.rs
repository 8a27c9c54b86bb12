//! Puppies Library
//!
//! Startup wiring shared by the binary and integration tests: building the
//! initial state from CLI options and the headless JSON renderer.

pub mod headless;
pub mod startup;

pub use headless::write_screen;
pub use startup::build_state;
