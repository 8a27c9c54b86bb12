//! Centralized theme system
//!
//! This module provides:
//! - `palette`: Dark and light color sets
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
