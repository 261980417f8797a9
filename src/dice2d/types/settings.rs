//! Application settings types and persistence
//!
//! Settings live in a small JSON file next to the executable's working
//! directory. Every field has a serde default so hand-edited, partial files
//! still load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::log::info;
use bevy::prelude::*;
use dicebox_core::{ConfigError, RollSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = "dicebox_settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write settings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSetting {
    #[serde(default = "default_window_title")]
    pub title: String,

    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_title() -> String {
    "Dice".to_string()
}
fn default_window_width() -> u32 {
    900
}
fn default_window_height() -> u32 {
    650
}

impl Default for WindowSetting {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

// ============================================================================
// App settings
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub window: WindowSetting,

    /// Directory holding the face images and the roll sound
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default)]
    pub roll: RollSettings,

    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}
fn default_sound_enabled() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window: WindowSetting::default(),
            assets_dir: default_assets_dir(),
            roll: RollSettings::default(),
            sound_enabled: default_sound_enabled(),
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roll.validate()
    }

    /// Read and validate a settings file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: AppSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, using defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error, so the
    /// caller can report it before anything overwrites it.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let settings = Self::load_from_file(path)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
