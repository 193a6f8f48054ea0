//! Sound feedback.
//!
//! A fixed catalog maps each [`SfxEvent`] to an asset, volume and cooldown.
//! [`FeedbackDispatcher`] gates requests on the user's preferences and a
//! per-event cooldown ledger, then hands them to an [`AudioEngine`] without
//! waiting for playback.

pub mod catalog;
pub mod dispatch;
pub mod engine;
pub mod tones;

use thiserror::Error;

// Re-export main types
pub use catalog::{SfxCatalog, SfxConfig, SfxEvent};
pub use dispatch::{Clock, DispatchOutcome, FeedbackDispatcher, ManualClock, SystemClock};
pub use engine::{AudioEngine, NullAudioEngine, PlaybackRequest, RodioAudioEngine};
pub use tones::{CuePattern, Tone};

/// Errors that can occur during audio operations
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Sound file not found: {0}")]
    SoundNotFound(String),

    #[error("Could not decode {path}: {reason}")]
    DecodeFailed { path: String, reason: String },

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Audio worker is not running")]
    WorkerGone,
}
