//! Integration tests for the interaction layer: first gesture, sound gating
//! and analytics in one flow.

use super::audio_mock::RecordingAudioEngine;
use crossbeam::channel;
use lexikid::analytics::ChannelAnalyticsSink;
use lexikid::audio::{DispatchOutcome, FeedbackDispatcher, ManualClock, SfxEvent};
use lexikid::interaction::InteractionLayer;
use lexikid::motion::{MotionPolicy, ReducedMotionSignal};
use lexikid::storage::{PreferenceStore, TomlPreferenceStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

struct Harness {
    layer: InteractionLayer,
    engine: Arc<RecordingAudioEngine>,
    clock: ManualClock,
    signal: ReducedMotionSignal,
    events: channel::Receiver<lexikid::analytics::InteractionEvent>,
    _dir: TempDir,
}

fn harness() -> Harness {
    harness_in(TempDir::new().unwrap())
}

fn harness_in(dir: TempDir) -> Harness {
    let store: Arc<dyn PreferenceStore> = Arc::new(TomlPreferenceStore::new(dir.path()));
    let engine = Arc::new(RecordingAudioEngine::default());
    let clock = ManualClock::new();
    let dispatcher = FeedbackDispatcher::new(engine.clone(), store.clone())
        .with_clock(Arc::new(clock.clone()));
    let signal = ReducedMotionSignal::new(false);
    let (tx, events) = channel::unbounded();

    let layer = InteractionLayer::new(signal.resolver(), dispatcher, store)
        .with_analytics(Arc::new(ChannelAnalyticsSink::new(tx)));

    Harness {
        layer,
        engine,
        clock,
        signal,
        events,
        _dir: dir,
    }
}

#[test]
fn test_quiz_round_sounds() {
    let mut h = harness();

    assert_eq!(
        h.layer.acknowledge("exercise.start", SfxEvent::Welcome),
        DispatchOutcome::Requested
    );
    h.clock.advance(Duration::from_millis(500));
    h.layer.acknowledge("exercise.option", SfxEvent::Tap);
    h.clock.advance(Duration::from_millis(50));
    // Second tap inside the 120ms window is swallowed
    assert_eq!(
        h.layer.acknowledge("exercise.option", SfxEvent::Tap),
        DispatchOutcome::CoolingDown
    );
    h.clock.advance(Duration::from_millis(200));
    h.layer.acknowledge("exercise.submit", SfxEvent::Submit);

    assert_eq!(
        h.engine.events(),
        vec![SfxEvent::Welcome, SfxEvent::Tap, SfxEvent::Submit]
    );
    // Analytics sees every activation, cooled down or not
    assert_eq!(h.events.try_iter().count(), 4);
}

#[test]
fn test_sound_toggle_silences_dispatch() {
    let mut h = harness();
    h.layer.set_sound_enabled(false).unwrap();

    assert_eq!(
        h.layer.acknowledge("settings.sound", SfxEvent::Tap),
        DispatchOutcome::Muted
    );
    assert!(h.engine.events().is_empty());

    h.layer.set_sound_enabled(true).unwrap();
    assert!(h.layer.acknowledge("settings.sound", SfxEvent::Tap).was_requested());
}

#[test]
fn test_motion_toggle_reaches_layer() {
    let mut h = harness();
    assert_eq!(h.layer.motion_policy(), MotionPolicy::Full);

    h.signal.set(true);
    assert_eq!(h.layer.take_motion_change(), Some(MotionPolicy::Reduced));
    assert_eq!(h.layer.motion_policy(), MotionPolicy::Reduced);
}

#[test]
fn test_analytics_event_names_control() {
    let mut h = harness();
    h.layer.acknowledge("tabs", SfxEvent::Tap);

    let event = h.events.try_recv().unwrap();
    assert_eq!(event.control, "tabs");
    assert_eq!(event.cue, Some(SfxEvent::Tap));
}

#[test]
fn test_corrupt_preferences_file_recovers_on_toggle() {
    let dir = TempDir::new().unwrap();
    let path = TomlPreferenceStore::new(dir.path()).path().to_path_buf();
    std::fs::write(&path, "sound_enabled = \"maybe\"").unwrap();
    let mut h = harness_in(dir);

    assert!(!h.layer.sound_enabled());
    h.layer.set_sound_enabled(true).unwrap();

    assert_eq!(
        h.layer.acknowledge("settings.sound", SfxEvent::Tap),
        DispatchOutcome::Requested
    );
    assert_eq!(h.engine.events(), vec![SfxEvent::Tap]);
    assert!(std::fs::read_to_string(&path).unwrap().contains("sound_enabled = true"));
}
