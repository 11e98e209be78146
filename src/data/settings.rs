//! Player settings
//!
//! Presentation knobs read from `settings.ron`. A missing file means
//! defaults; a broken one is an error the caller decides how to handle.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable pointing at an alternative settings file
pub const SETTINGS_ENV: &str = "GAUNTLET_SETTINGS";
const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between characters of animated text, in milliseconds
    pub text_delay_ms: u64,
    /// Clear the terminal between screens
    pub clear_screen: bool,
    pub color: bool,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text_delay_ms: 15,
            clear_screen: true,
            color: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from RON text
    pub fn from_ron(content: &str, path: &Path) -> Result<Self, SettingsError> {
        ron::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("No settings at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_ron(&content, path)?;
        log::info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Load from the default location, writing defaults there on first launch
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_or_init(&settings_path())
    }

    /// Like [`Settings::load_from`], but a missing file is created with the
    /// defaults so players have something to edit
    pub fn load_or_init(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = Self::default();
        if let Err(e) = settings.save_to(path) {
            log::warn!("Could not write default settings: {}", e);
        }
        Ok(settings)
    }

    /// Write these settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_ron()?).map_err(io_err)?;
        log::info!("Settings saved to {:?}", path);
        Ok(())
    }
}

/// Settings file location: `$GAUNTLET_SETTINGS`, else the platform config dir
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(path) = std::env::var_os(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    if let Some(proj_dirs) = ProjectDirs::from("com", "gauntlet", "Gauntlet") {
        proj_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        PathBuf::from(".").join(SETTINGS_FILE)
    }
}
