//! Game settings
//!
//! Persisted as JSON next to the save file. Every field has a default, so a
//! partial file only overrides what it names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SAVE_PATH, DEFAULT_SETTINGS_PATH, SETTINGS_PATH_ENV,
};

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lowest possible secret number (inclusive)
    pub min: i32,
    /// Highest possible secret number (inclusive)
    pub max: i32,
    /// Where `save` writes and `load` reads
    pub save_path: PathBuf,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Prompt written before each line of input
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
            prompt: "> ".to_string(),
        }
    }
}

impl Settings {
    /// Settings file location: `$NUMBER_GUESS_SETTINGS` or the default name
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings, falling back to defaults on a missing or unreadable file
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.validated()
            }
            Err(e) => {
                log::warn!("Malformed settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reset the bounds unless `0 < min < max`, the range a save can hold
    pub fn validated(mut self) -> Self {
        if self.min <= 0 || self.min >= self.max {
            log::warn!(
                "Invalid range {}..={} in settings, using {}..={}",
                self.min,
                self.max,
                DEFAULT_MIN,
                DEFAULT_MAX
            );
            self.min = DEFAULT_MIN;
            self.max = DEFAULT_MAX;
        }
        self
    }
}
