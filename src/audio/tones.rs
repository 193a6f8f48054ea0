//! Synthesized fallback cues.
//!
//! Used when an event's asset is missing from the assets directory, so a
//! fresh install still gives audible feedback.

use super::catalog::SfxEvent;
use rodio::source::{SineWave, Zero};
use rodio::{Sink, Source};
use std::time::Duration;

/// Note pitches for the fallback cues, in Hz.
pub mod frequencies {
    pub const LOW: f32 = 261.63; // C4
    pub const MEDIUM: f32 = 329.63; // E4
    pub const HIGH: f32 = 392.00; // G4
    pub const VERY_HIGH: f32 = 523.25; // C5
    pub const SUCCESS: f32 = 1046.50; // C6
    pub const ERROR: f32 = 220.00; // A3
}

/// Note lengths for the fallback cues, in milliseconds.
pub mod durations {
    pub const TICK: u64 = 40;
    pub const BEEP: u64 = 80;
    pub const QUICK: u64 = 120;
    pub const STANDARD: u64 = 200;
    pub const LONG: u64 = 400;
}

/// Synthesized stand-in for a missing asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuePattern {
    /// Soft tick for taps
    Tick,
    /// Double beep for submit
    DoubleBeep,
    /// Rising three-note chime
    Ascending,
    /// Short fanfare
    Success,
    /// Low buzz
    Error,
}

impl CuePattern {
    /// Fallback pattern for an event.
    pub fn for_event(event: SfxEvent) -> Self {
        match event {
            SfxEvent::Welcome => CuePattern::Ascending,
            SfxEvent::Tap => CuePattern::Tick,
            SfxEvent::Submit => CuePattern::DoubleBeep,
            SfxEvent::Progress => CuePattern::Ascending,
            SfxEvent::End => CuePattern::Success,
            SfxEvent::Error => CuePattern::Error,
        }
    }

    /// Notes and rests making up the pattern.
    pub fn tones(&self) -> Vec<Tone> {
        use durations::*;
        use frequencies::*;

        match self {
            CuePattern::Tick => vec![Tone::new(VERY_HIGH, TICK)],

            CuePattern::DoubleBeep => vec![
                Tone::new(HIGH, BEEP),
                Tone::pause(40),
                Tone::new(HIGH, BEEP),
            ],

            CuePattern::Ascending => vec![
                Tone::new(LOW, BEEP),
                Tone::pause(20),
                Tone::new(MEDIUM, BEEP),
                Tone::pause(20),
                Tone::new(HIGH, QUICK),
            ],

            CuePattern::Success => vec![
                Tone::new(MEDIUM, QUICK),
                Tone::pause(40),
                Tone::new(HIGH, QUICK),
                Tone::pause(40),
                Tone::new(SUCCESS, LONG),
            ],

            CuePattern::Error => vec![Tone::new(ERROR, STANDARD)],
        }
    }

    /// Length of the whole pattern in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.tones().iter().map(|t| t.duration_ms).sum()
    }

    /// Queue the pattern on `sink` at `volume`.
    pub fn append_to(&self, sink: &Sink, volume: f32) {
        for tone in self.tones() {
            let duration = Duration::from_millis(tone.duration_ms);
            if tone.is_pause() {
                sink.append(Zero::<f32>::new(1, 48_000).take_duration(duration));
            } else {
                sink.append(
                    SineWave::new(tone.frequency_hz)
                        .take_duration(duration)
                        .amplify(volume),
                );
            }
        }
    }
}

/// One note, or a rest when `frequency_hz` is zero.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u64,
}

impl Tone {
    pub fn new(frequency_hz: f32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    pub fn pause(duration_ms: u64) -> Self {
        Self {
            frequency_hz: 0.0,
            duration_ms,
        }
    }

    pub fn is_pause(&self) -> bool {
        self.frequency_hz <= 0.0
    }
}
