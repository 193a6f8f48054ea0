//! The sound-effect catalog.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named feedback events that can produce a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SfxEvent {
    /// App or exercise opened
    Welcome,
    /// Any control pressed
    Tap,
    /// Answer submitted
    Submit,
    /// Moved on to the next item
    Progress,
    /// Exercise finished
    End,
    /// Wrong answer or failed action
    Error,
}

impl SfxEvent {
    pub const ALL: [SfxEvent; 6] = [
        SfxEvent::Welcome,
        SfxEvent::Tap,
        SfxEvent::Submit,
        SfxEvent::Progress,
        SfxEvent::End,
        SfxEvent::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SfxEvent::Welcome => "welcome",
            SfxEvent::Tap => "tap",
            SfxEvent::Submit => "submit",
            SfxEvent::Progress => "progress",
            SfxEvent::End => "end",
            SfxEvent::Error => "error",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for SfxEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback parameters for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SfxConfig {
    /// Asset path, relative to the audio assets directory
    pub source: &'static str,
    /// 0.0 - 1.0
    pub volume: f32,
    /// Minimum gap between two accepted dispatches of the same event
    pub cooldown_ms: u64,
}

impl SfxConfig {
    pub const fn new(source: &'static str, volume: f32, cooldown_ms: u64) -> Self {
        Self {
            source,
            volume,
            cooldown_ms,
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

const STANDARD: [SfxConfig; 6] = [
    SfxConfig::new("sfx/welcome.mp3", 0.6, 1000),
    SfxConfig::new("sfx/tap.mp3", 0.35, 120),
    SfxConfig::new("sfx/submit.mp3", 0.6, 300),
    SfxConfig::new("sfx/progress.mp3", 0.5, 250),
    SfxConfig::new("sfx/end.mp3", 0.7, 1000),
    SfxConfig::new("sfx/error.mp3", 0.5, 400),
];

/// Read-only table from event to playback parameters. Every event has an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SfxCatalog {
    entries: [SfxConfig; 6],
}

impl Default for SfxCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl SfxCatalog {
    /// The catalog shipped with the application.
    pub fn standard() -> Self {
        Self { entries: STANDARD }
    }

    /// Replace one entry.
    pub fn with_entry(mut self, event: SfxEvent, config: SfxConfig) -> Self {
        self.entries[event.index()] = config;
        self
    }

    pub fn get(&self, event: SfxEvent) -> &SfxConfig {
        &self.entries[event.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SfxEvent, &SfxConfig)> {
        SfxEvent::ALL.into_iter().map(move |event| (event, self.get(event)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = SfxCatalog::standard();
        for (event, config) in catalog.iter() {
            assert!((0.0..=1.0).contains(&config.volume), "{event} volume");
            assert!(config.source.ends_with(".mp3"));
            assert!(config.source.contains(event.as_str()));
        }
    }

    #[test]
    fn test_tap_cooldown() {
        let catalog = SfxCatalog::standard();
        assert_eq!(catalog.get(SfxEvent::Tap).cooldown(), Duration::from_millis(120));
    }

    #[test]
    fn test_with_entry_replaces_only_one() {
        let catalog =
            SfxCatalog::standard().with_entry(SfxEvent::Error, SfxConfig::new("x.wav", 1.0, 0));
        assert_eq!(catalog.get(SfxEvent::Error).source, "x.wav");
        assert_eq!(catalog.get(SfxEvent::Tap), SfxCatalog::standard().get(SfxEvent::Tap));
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&SfxEvent::Submit).unwrap();
        assert_eq!(json, "\"submit\"");
    }
}
