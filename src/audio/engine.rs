//! Audio engine
//!
//! Fire-and-forget playback of catalog assets using rodio.

use super::catalog::SfxEvent;
use super::tones::CuePattern;
use super::AudioError;
use crossbeam::channel::{self, Receiver, Sender};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// One playback request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    pub event: SfxEvent,
    /// Asset path relative to the engine's assets directory
    pub source: String,
    /// 0.0 - 1.0
    pub volume: f32,
}

/// Something that can play a sound without making the caller wait.
///
/// `play` only reports failures that happen while handing the request over;
/// anything that goes wrong during playback is logged by the engine.
pub trait AudioEngine: Send + Sync {
    fn play(&self, request: PlaybackRequest) -> Result<(), AudioError>;
}

/// Engine that drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudioEngine;

impl AudioEngine for NullAudioEngine {
    fn play(&self, request: PlaybackRequest) -> Result<(), AudioError> {
        tracing::trace!("Dropping {} sound (no audio output)", request.event);
        Ok(())
    }
}

/// rodio-backed engine.
///
/// rodio's output stream is not `Send`, so it lives on a dedicated worker
/// thread that receives requests over a channel.
pub struct RodioAudioEngine {
    tx: Sender<PlaybackRequest>,
    _worker: JoinHandle<()>,
}

impl RodioAudioEngine {
    /// Spawn the audio worker. Assets are resolved against `assets_dir`.
    pub fn spawn(assets_dir: PathBuf) -> Result<Self, AudioError> {
        let (tx, rx) = channel::unbounded();

        let worker = std::thread::Builder::new()
            .name("lexikid-audio".into())
            .spawn(move || run_worker(rx, assets_dir))
            .map_err(|e| AudioError::DeviceNotAvailable(e.to_string()))?;

        Ok(Self {
            tx,
            _worker: worker,
        })
    }
}

impl AudioEngine for RodioAudioEngine {
    fn play(&self, request: PlaybackRequest) -> Result<(), AudioError> {
        self.tx.send(request).map_err(|_| AudioError::WorkerGone)
    }
}

fn run_worker(rx: Receiver<PlaybackRequest>, assets_dir: PathBuf) {
    let output = match OutputStream::try_default() {
        Ok(output) => {
            tracing::info!("Audio output ready, assets in {}", assets_dir.display());
            Some(output)
        }
        Err(e) => {
            tracing::warn!("No audio output device, sound effects disabled: {}", e);
            None
        }
    };

    // Exits when the engine (and with it the sender) is dropped
    for request in rx.iter() {
        let Some((_stream, handle)) = &output else {
            continue;
        };

        if let Err(e) = play_request(handle, &assets_dir, &request) {
            tracing::warn!("Playback of {} failed: {}", request.event, e);
        }
    }

    tracing::debug!("Audio worker stopped");
}

fn play_request(
    handle: &OutputStreamHandle,
    assets_dir: &Path,
    request: &PlaybackRequest,
) -> Result<(), AudioError> {
    let sink = Sink::try_new(handle).map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
    let path = assets_dir.join(&request.source);

    match open_asset(&path) {
        Ok(decoder) => {
            sink.set_volume(request.volume);
            sink.append(decoder);
        }
        Err(AudioError::SoundNotFound(missing)) => {
            tracing::debug!("{} missing, using synthesized cue", missing);
            CuePattern::for_event(request.event).append_to(&sink, request.volume);
        }
        Err(e) => return Err(e),
    }

    sink.detach();
    Ok(())
}

fn open_asset(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AudioError::SoundNotFound(path.display().to_string()),
        _ => AudioError::PlaybackFailed(e.to_string()),
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| AudioError::DecodeFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
