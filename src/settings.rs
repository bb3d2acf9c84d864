//! Game settings and preferences.
//!
//! Loaded once at startup from an optional JSON file next to the binary.
//! Anything missing or malformed falls back to defaults; settings are never
//! written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOP_PIPE_HEIGHT;

/// Default settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "skyward.json";

/// User-tunable knobs. Gameplay constants live in [`crate::constants`]; only
/// the values that vary by installation belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Height of the top pipe's collision segment in logical pixels.
    /// Varies with the pipe art, hence a setting rather than a constant.
    pub top_pipe_height: i32,
    /// Directory holding sprite text files and sound files.
    pub assets_dir: PathBuf,
    /// Master switch for the sound player.
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_pipe_height: DEFAULT_TOP_PIPE_HEIGHT,
            assets_dir: PathBuf::from("assets"),
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or unreadable. A missing file is the normal case and only
    /// logged at debug level; a malformed one gets a warning.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::debug!("no settings file at {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!(
                    "ignoring malformed settings file {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }
}
