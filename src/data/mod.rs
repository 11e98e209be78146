//! External configuration
//!
//! Settings are loaded from a RON file so players can tune the terminal
//! presentation without rebuilding.

pub mod settings;

pub use settings::{settings_path, Settings, SettingsError, SETTINGS_ENV};
