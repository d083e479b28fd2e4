use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::domain::theme::ThemeMode;
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,
}

fn default_font_size() -> u32 {
    16
}

fn default_word_wrap() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            font_size: default_font_size(),
            word_wrap_enabled: default_word_wrap(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create defaults if not present.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("failed to parse settings: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                // First run: persist defaults for next time.
                let default = Self::default();
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Config file path (cross-platform).
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.font_size, 16);
        assert!(settings.word_wrap_enabled);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Old config missing new fields falls back per-field.
        let json = r#"{"font_size": 20}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert!(settings.word_wrap_enabled);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
    }

    #[test]
    fn test_config_path_ends_with_expected_components() {
        let path = AppSettings::get_config_path();
        assert!(path.ends_with("markpad/settings.json"));
    }
}
