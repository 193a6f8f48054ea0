//! Persisted UI preferences (sound toggle and first-gesture flag).
//!
//! The host writes these; the feedback layer only reads them on dispatch.

use super::config::{get_data_dir, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

/// Fixed storage key the preferences live under.
pub const UI_PREFERENCES_KEY: &str = "ui-preferences";

/// User-facing UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    /// User toggle for sound effects
    pub sound_enabled: bool,
    /// Set once the user has performed a gesture; audio may only play after it.
    /// Never reset within a session.
    pub has_interacted: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            has_interacted: false,
        }
    }
}

impl UiPreferences {
    /// Fallback used when the store cannot be read: silent.
    pub fn unavailable() -> Self {
        Self {
            sound_enabled: false,
            has_interacted: false,
        }
    }

    pub fn can_play_sound(&self) -> bool {
        self.sound_enabled && self.has_interacted
    }

    /// Mark the first gesture. Returns true if this call flipped the flag.
    pub fn record_interaction(&mut self) -> bool {
        let first = !self.has_interacted;
        self.has_interacted = true;
        first
    }
}

/// Key-value storage holding [`UiPreferences`].
pub trait PreferenceStore: Send + Sync {
    /// Read the current preferences.
    fn load(&self) -> Result<UiPreferences, ConfigError>;

    /// Persist new preferences.
    fn save(&self, preferences: &UiPreferences) -> Result<(), ConfigError>;

    /// Read-modify-write; only saves when `f` changed something.
    fn update(
        &self,
        f: &mut dyn FnMut(&mut UiPreferences),
    ) -> Result<UiPreferences, ConfigError> {
        let mut preferences = self.load()?;
        let before = preferences;
        f(&mut preferences);
        if preferences != before {
            self.save(&preferences)?;
        }
        Ok(preferences)
    }
}

/// TOML file store, `ui-preferences.toml` in the data directory.
///
/// Reads go to the file once and are then served from memory; saves write
/// through. A save updates memory before touching the file, so a failed
/// write still holds for the rest of the session.
pub struct TomlPreferenceStore {
    path: PathBuf,
    cache: RwLock<Option<UiPreferences>>,
}

impl TomlPreferenceStore {
    /// Store inside `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.toml", UI_PREFERENCES_KEY)),
            cache: RwLock::new(None),
        }
    }

    /// Store inside the platform data directory.
    pub fn in_data_dir() -> Self {
        Self::new(&get_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<UiPreferences, ConfigError> {
        if !self.path.exists() {
            return Ok(UiPreferences::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn load(&self) -> Result<UiPreferences, ConfigError> {
        if let Some(cached) = *self
            .cache
            .read()
            .map_err(|_| ConfigError::Unavailable("preference cache poisoned".into()))?
        {
            return Ok(cached);
        }

        let preferences = self.read_file()?;
        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(preferences);
        }
        Ok(preferences)
    }

    fn save(&self, preferences: &UiPreferences) -> Result<(), ConfigError> {
        {
            let mut cache = self
                .cache
                .write()
                .map_err(|_| ConfigError::Unavailable("preference cache poisoned".into()))?;
            *cache = Some(*preferences);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = toml::to_string_pretty(preferences)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        tracing::debug!("Saved UI preferences to {}", self.path.display());
        Ok(())
    }

    /// Like the default, except that an unparsable file is replaced: the
    /// change is applied to the defaults and written over it.
    fn update(
        &self,
        f: &mut dyn FnMut(&mut UiPreferences),
    ) -> Result<UiPreferences, ConfigError> {
        let (mut preferences, recovered) = match self.load() {
            Ok(preferences) => (preferences, false),
            Err(ConfigError::ParseError(e)) => {
                tracing::warn!(
                    "Replacing unreadable {} with defaults: {}",
                    self.path.display(),
                    e
                );
                (UiPreferences::default(), true)
            }
            Err(e) => return Err(e),
        };

        let before = preferences;
        f(&mut preferences);
        if recovered || preferences != before {
            self.save(&preferences)?;
        }
        Ok(preferences)
    }
}

/// In-memory store; can be switched to fail every read.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    preferences: Mutex<UiPreferences>,
    unavailable: AtomicBool,
}

impl MemoryPreferenceStore {
    pub fn new(preferences: UiPreferences) -> Self {
        Self {
            preferences: Mutex::new(preferences),
            unavailable: AtomicBool::new(false),
        }
    }

    /// A store whose reads and writes always fail.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_unavailable(true);
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(ConfigError::Unavailable("storage disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<UiPreferences, ConfigError> {
        self.check()?;
        self.preferences
            .lock()
            .map(|p| *p)
            .map_err(|_| ConfigError::Unavailable("preference lock poisoned".into()))
    }

    fn save(&self, preferences: &UiPreferences) -> Result<(), ConfigError> {
        self.check()?;
        let mut current = self
            .preferences
            .lock()
            .map_err(|_| ConfigError::Unavailable("preference lock poisoned".into()))?;
        *current = *preferences;
        Ok(())
    }
}
