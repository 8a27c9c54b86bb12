//! Configuration types
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Title shown in the top app bar
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub theme: Theme,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: Theme::default(),
        }
    }
}

fn default_title() -> String {
    "OUR PUPPIES".to_string()
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Back on the list screen exits, like a platform back button on the
    /// root screen
    #[serde(default = "default_true")]
    pub back_quits_at_root: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            back_quits_at_root: true,
        }
    }
}

fn default_true() -> bool {
    true
}
