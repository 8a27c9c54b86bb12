//! Configuration file parsing for the puppy catalog
//!
//! Supports:
//! - `config.toml` - UI and behavior settings, under the user config directory
//!   (`~/.config/puppies/` on Linux) or a directory given on the command line

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, load_settings, settings_path, CONFIG_FILENAME};
pub use types::*;
