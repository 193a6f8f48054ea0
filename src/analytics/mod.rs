//! Best-effort interaction analytics.
//!
//! Sinks are fire-and-forget: they never return errors and their absence
//! changes nothing else.

use crate::audio::SfxEvent;
use chrono::{DateTime, Utc};
use crossbeam::channel::Sender;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One notable interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Random per-process id, never tied to a user
    pub session_id: Uuid,
    /// Stable name of the control, e.g. `exercise.submit`
    pub control: String,
    /// Sound cue associated with the interaction, if any
    pub cue: Option<SfxEvent>,
    pub at: DateTime<Utc>,
}

impl InteractionEvent {
    pub fn new(session_id: Uuid, control: impl Into<String>, cue: Option<SfxEvent>) -> Self {
        Self {
            session_id,
            control: control.into(),
            cue,
            at: Utc::now(),
        }
    }
}

/// Destination for interaction events.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &InteractionEvent);
}

/// Writes events as JSON through `tracing` under the `lexikid::analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsSink;

impl AnalyticsSink for TracingAnalyticsSink {
    fn track(&self, event: &InteractionEvent) {
        match serde_json::to_string(event) {
            Ok(json) => tracing::info!(target: "lexikid::analytics", "{}", json),
            Err(e) => tracing::debug!("Dropping analytics event: {}", e),
        }
    }
}

/// Forwards events to a channel; drops them when the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelAnalyticsSink {
    tx: Sender<InteractionEvent>,
}

impl ChannelAnalyticsSink {
    pub fn new(tx: Sender<InteractionEvent>) -> Self {
        Self { tx }
    }
}

impl AnalyticsSink for ChannelAnalyticsSink {
    fn track(&self, event: &InteractionEvent) {
        if self.tx.try_send(event.clone()).is_err() {
            tracing::trace!("Analytics receiver gone, event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;

    #[test]
    fn test_event_json_shape() {
        let event = InteractionEvent::new(Uuid::nil(), "settings.sound", Some(SfxEvent::Tap));
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["control"], "settings.sound");
        assert_eq!(json["cue"], "tap");
    }

    #[test]
    fn test_channel_sink_forwards() {
        let (tx, rx) = channel::unbounded();
        let sink = ChannelAnalyticsSink::new(tx);
        sink.track(&InteractionEvent::new(Uuid::nil(), "tabs.reading", None));
        assert_eq!(rx.try_recv().unwrap().control, "tabs.reading");
    }

    #[test]
    fn test_channel_sink_without_receiver_is_silent() {
        let (tx, rx) = channel::bounded(1);
        drop(rx);
        let sink = ChannelAnalyticsSink::new(tx);
        sink.track(&InteractionEvent::new(Uuid::nil(), "x", None));
    }
}
