//! Audio engine test double that records playback requests.

use lexikid::audio::{AudioEngine, AudioError, PlaybackRequest, SfxEvent};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingAudioEngine {
    requests: Mutex<Vec<PlaybackRequest>>,
}

impl RecordingAudioEngine {
    pub fn events(&self) -> Vec<SfxEvent> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.event)
            .collect()
    }
}

impl AudioEngine for RecordingAudioEngine {
    fn play(&self, request: PlaybackRequest) -> Result<(), AudioError> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }
}
