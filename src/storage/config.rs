//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory; a missing file
//! yields defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Sound effect settings
    pub audio: AudioSettings,
    /// Accessibility overrides
    pub accessibility: AccessibilitySettings,
    /// Interaction analytics
    pub analytics: AnalyticsSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            audio: AudioSettings::default(),
            accessibility: AccessibilitySettings::default(),
            analytics: AnalyticsSettings::default(),
        }
    }
}

/// Sound effect settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Directory the catalog's asset references are resolved against.
    /// Relative paths are resolved against the data directory.
    pub assets_dir: PathBuf,
    /// Multiplier applied to every catalog volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            master_volume: 1.0,
        }
    }
}

impl AudioSettings {
    /// Master volume clamped to the valid range.
    pub fn master_volume(&self) -> f32 {
        if self.master_volume.is_finite() {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Resolve the assets directory against `data_dir`.
    pub fn resolve_assets_dir(&self, data_dir: &Path) -> PathBuf {
        if self.assets_dir.is_absolute() {
            self.assets_dir.clone()
        } else {
            data_dir.join(&self.assets_dir)
        }
    }
}

/// Accessibility overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    /// Force reduced motion on or off; `None` follows the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_motion: Option<bool>,
}

/// Interaction analytics settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub enabled: bool,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "lexikid", "Lexikid")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path(), get_data_dir())
}

/// Load configuration from `path`, stamping `data_dir` on the result.
pub fn load_config_from(path: &Path, data_dir: PathBuf) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&get_config_path(), config)
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            load_config_from(&dir.path().join("config.toml"), dir.path().to_path_buf()).unwrap();
        assert_eq!(config.audio.master_volume(), 1.0);
        assert_eq!(config.accessibility.reduce_motion, None);
        assert!(config.analytics.enabled);
        assert_eq!(config.data_dir, dir.path());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[accessibility]\nreduce_motion = true\n").unwrap();

        let config = load_config_from(&path, dir.path().to_path_buf()).unwrap();
        assert_eq!(config.accessibility.reduce_motion, Some(true));
        assert_eq!(config.audio, AudioSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.audio.master_volume = 0.5;
        config.analytics.enabled = false;

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path, PathBuf::new()).unwrap();
        assert_eq!(loaded.audio.master_volume, 0.5);
        assert!(!loaded.analytics.enabled);
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "audio = [not toml").unwrap();
        let err = load_config_from(&path, PathBuf::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_master_volume_clamped() {
        let settings = AudioSettings {
            master_volume: 3.0,
            ..Default::default()
        };
        assert_eq!(settings.master_volume(), 1.0);

        let settings = AudioSettings {
            master_volume: f32::NAN,
            ..Default::default()
        };
        assert_eq!(settings.master_volume(), 1.0);
    }
}
