//! Unit tests for the cooldown-gated sound dispatcher.

use lexikid::audio::{
    AudioEngine, AudioError, DispatchOutcome, FeedbackDispatcher, ManualClock, PlaybackRequest,
    SfxCatalog, SfxConfig, SfxEvent,
};
use lexikid::storage::{MemoryPreferenceStore, UiPreferences};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct RecordingAudioEngine {
    requests: Mutex<Vec<PlaybackRequest>>,
    fail: bool,
}

impl RecordingAudioEngine {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl AudioEngine for RecordingAudioEngine {
    fn play(&self, request: PlaybackRequest) -> Result<(), AudioError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            Err(AudioError::DeviceNotAvailable("no output".into()))
        } else {
            Ok(())
        }
    }
}

fn interacted() -> Arc<MemoryPreferenceStore> {
    Arc::new(MemoryPreferenceStore::new(UiPreferences {
        sound_enabled: true,
        has_interacted: true,
    }))
}

fn setup(
    engine: Arc<RecordingAudioEngine>,
    store: Arc<MemoryPreferenceStore>,
) -> (FeedbackDispatcher, ManualClock) {
    let clock = ManualClock::new();
    let dispatcher = FeedbackDispatcher::new(engine, store).with_clock(Arc::new(clock.clone()));
    (dispatcher, clock)
}

/// Welcome has a one second cooldown; a burst only plays the first.
#[test]
fn test_welcome_burst_plays_once() {
    let engine = Arc::new(RecordingAudioEngine::default());
    let (mut dispatcher, clock) = setup(engine.clone(), interacted());

    for _ in 0..5 {
        dispatcher.dispatch(SfxEvent::Welcome);
        clock.advance(Duration::from_millis(100));
    }

    assert_eq!(engine.count(), 1);
}

#[test]
fn test_before_first_interaction_nothing_plays() {
    let engine = Arc::new(RecordingAudioEngine::default());
    let store = Arc::new(MemoryPreferenceStore::default());
    let (mut dispatcher, _clock) = setup(engine.clone(), store);

    for event in SfxEvent::ALL {
        assert_eq!(dispatcher.dispatch(event), DispatchOutcome::AwaitingInteraction);
    }
    assert_eq!(engine.count(), 0);
}

#[test]
fn test_failed_playback_still_starts_cooldown() {
    let engine = Arc::new(RecordingAudioEngine::failing());
    let (mut dispatcher, clock) = setup(engine.clone(), interacted());

    assert_eq!(dispatcher.dispatch(SfxEvent::Submit), DispatchOutcome::Requested);
    assert!(dispatcher.last_fired(SfxEvent::Submit).is_some());

    clock.advance(Duration::from_millis(100));
    assert_eq!(dispatcher.dispatch(SfxEvent::Submit), DispatchOutcome::CoolingDown);
    assert_eq!(engine.count(), 1);
}

#[test]
fn test_unreadable_preferences_stay_silent() {
    let engine = Arc::new(RecordingAudioEngine::default());
    let store = interacted();
    store.set_unavailable(true);
    let (mut dispatcher, _clock) = setup(engine.clone(), store);

    assert_eq!(dispatcher.dispatch(SfxEvent::Tap), DispatchOutcome::Muted);
    assert_eq!(engine.count(), 0);
}

#[test]
fn test_master_volume_scales_catalog_volume() {
    let engine = Arc::new(RecordingAudioEngine::default());
    let (dispatcher, _clock) = setup(engine.clone(), interacted());
    let mut dispatcher = dispatcher.with_master_volume(0.5);

    dispatcher.dispatch(SfxEvent::End);

    let requests = engine.requests.lock().unwrap();
    assert_eq!(requests[0].source, "sfx/end.mp3");
    assert!((requests[0].volume - 0.35).abs() < 1e-6);
}

#[test]
fn test_custom_catalog_cooldown() {
    let engine = Arc::new(RecordingAudioEngine::default());
    let (dispatcher, clock) = setup(engine.clone(), interacted());
    let catalog =
        SfxCatalog::standard().with_entry(SfxEvent::Tap, SfxConfig::new("sfx/click.wav", 1.0, 0));
    let mut dispatcher = dispatcher.with_catalog(catalog);

    dispatcher.dispatch(SfxEvent::Tap);
    dispatcher.dispatch(SfxEvent::Tap);
    clock.advance(Duration::from_millis(1));
    dispatcher.dispatch(SfxEvent::Tap);

    assert_eq!(engine.count(), 3);
}
