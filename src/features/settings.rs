//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Volume level (0 to 100)
    pub volume: u8,
    pub muted: bool,
    /// Playback rate, 1.0 is normal speed
    #[serde(default = "default_rate")]
    pub playback_rate: f32,
    pub keybindings: KeyBindings,
    pub display: DisplaySettings,
    /// Library panel state
    #[serde(default)]
    pub library: LibrarySettings,
}

fn default_rate() -> f32 {
    1.0
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Whether the library panel is shown next to the player
    pub visible: bool,
    /// Tag selected when the app was last closed
    pub last_tag_id: Option<i64>,
}

/// Playback rates offered by the rate picker
pub const PLAYBACK_RATES: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 100,
            muted: false,
            playback_rate: 1.0,
            keybindings: KeyBindings::default(),
            display: DisplaySettings::default(),
            library: LibrarySettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tomeo", "Tomeo")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Volume as the 0.0 - 1.0 gain handed to the backend
    pub fn gain(&self) -> f32 {
        f32::from(self.volume.min(100)) / 100.0
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.volume = 35;
        settings.muted = true;
        settings.playback_rate = 1.5;
        settings.display.language = "zh".to_string();
        settings.library.visible = true;
        settings.library.last_tag_id = Some(7);

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut json = serde_json::to_value(Settings::default()).unwrap();
        let object = json.as_object_mut().unwrap();
        object.remove("library");
        object.remove("playback_rate");
        std::fs::write(&path, json.to_string()).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.playback_rate, 1.0);
        assert_eq!(loaded.library, LibrarySettings::default());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::load_from_file(&dir.path().join("absent.json")),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn gain_is_normalized() {
        let mut settings = Settings::default();
        assert_eq!(settings.gain(), 1.0);
        settings.volume = 50;
        assert_eq!(settings.gain(), 0.5);
    }
}
