//! Storage module for configuration and persisted UI preferences.

pub mod config;
pub mod preferences;

pub use config::{
    AccessibilitySettings, AnalyticsSettings, AppConfig, AudioSettings, ConfigError,
};
pub use preferences::{
    MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore, UiPreferences,
    UI_PREFERENCES_KEY,
};
