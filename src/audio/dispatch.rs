//! Cooldown-gated sound dispatch.
//!
//! The dispatcher is owned by the UI thread (`&mut self`), so the cooldown
//! ledger has a single writer even when the engine plays on a worker thread.

use super::catalog::{SfxCatalog, SfxEvent};
use super::engine::{AudioEngine, PlaybackRequest};
use crate::storage::{PreferenceStore, UiPreferences};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of "now" for the cooldown ledger.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.lock().map(|now| *now).unwrap_or_else(|_| Instant::now())
    }
}

/// What a dispatch call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Playback was requested from the engine.
    Requested,
    /// Sound is switched off (or preferences could not be read).
    Muted,
    /// No user gesture yet; audio may not play.
    AwaitingInteraction,
    /// Same event fired too recently.
    CoolingDown,
}

impl DispatchOutcome {
    pub fn was_requested(&self) -> bool {
        matches!(self, DispatchOutcome::Requested)
    }
}

/// Sound-effect dispatcher with a per-event cooldown ledger.
pub struct FeedbackDispatcher {
    catalog: SfxCatalog,
    ledger: HashMap<SfxEvent, Instant>,
    engine: Arc<dyn AudioEngine>,
    preferences: Arc<dyn PreferenceStore>,
    clock: Arc<dyn Clock>,
    master_volume: f32,
}

impl FeedbackDispatcher {
    /// Dispatcher over the standard catalog and the wall clock.
    pub fn new(engine: Arc<dyn AudioEngine>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            catalog: SfxCatalog::standard(),
            ledger: HashMap::new(),
            engine,
            preferences,
            clock: Arc::new(SystemClock),
            master_volume: 1.0,
        }
    }

    pub fn with_catalog(mut self, catalog: SfxCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Multiplier applied to catalog volumes, clamped to 0.0 - 1.0.
    pub fn with_master_volume(mut self, master_volume: f32) -> Self {
        self.master_volume = master_volume.clamp(0.0, 1.0);
        self
    }

    pub fn catalog(&self) -> &SfxCatalog {
        &self.catalog
    }

    /// When `event` was last requested, if ever.
    pub fn last_fired(&self, event: SfxEvent) -> Option<Instant> {
        self.ledger.get(&event).copied()
    }

    /// Request the sound for `event` if preferences and cooldown allow it.
    ///
    /// Never fails: engine errors are logged and dropped. The ledger is
    /// stamped at request time, so a failed playback still counts against
    /// the cooldown.
    pub fn dispatch(&mut self, event: SfxEvent) -> DispatchOutcome {
        let preferences = self.preferences.load().unwrap_or_else(|e| {
            tracing::warn!("Could not read UI preferences, staying silent: {}", e);
            UiPreferences::unavailable()
        });

        if !preferences.sound_enabled {
            return DispatchOutcome::Muted;
        }
        if !preferences.has_interacted {
            return DispatchOutcome::AwaitingInteraction;
        }

        let config = *self.catalog.get(event);
        let now = self.clock.now();

        if let Some(last) = self.ledger.get(&event) {
            if now.saturating_duration_since(*last) < config.cooldown() {
                tracing::debug!("Suppressed {} sound (cooldown {}ms)", event, config.cooldown_ms);
                return DispatchOutcome::CoolingDown;
            }
        }

        self.ledger.insert(event, now);

        let request = PlaybackRequest {
            event,
            source: config.source.to_string(),
            volume: (config.volume * self.master_volume).clamp(0.0, 1.0),
        };

        if let Err(e) = self.engine.play(request) {
            tracing::warn!("Sound effect {} not played: {}", event, e);
        }

        DispatchOutcome::Requested
    }
}
