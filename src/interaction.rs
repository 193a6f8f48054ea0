//! Host-side wiring of motion, sound and analytics.
//!
//! Screens own their exercise state and call controls with plain values; after
//! a control's callback has run they call [`InteractionLayer::acknowledge`]
//! so feedback always follows the functional change.

use crate::analytics::{AnalyticsSink, InteractionEvent};
use crate::audio::{DispatchOutcome, FeedbackDispatcher, SfxEvent};
use crate::motion::{MotionPolicy, MotionPolicyResolver};
use crate::storage::{ConfigError, PreferenceStore, UiPreferences};
use std::sync::Arc;
use uuid::Uuid;

pub struct InteractionLayer {
    motion: MotionPolicyResolver,
    dispatcher: FeedbackDispatcher,
    preferences: Arc<dyn PreferenceStore>,
    analytics: Option<Arc<dyn AnalyticsSink>>,
    session_id: Uuid,
}

impl InteractionLayer {
    pub fn new(
        motion: MotionPolicyResolver,
        dispatcher: FeedbackDispatcher,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            motion,
            dispatcher,
            preferences,
            analytics: None,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn with_analytics(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    pub fn motion_policy(&self) -> MotionPolicy {
        self.motion.resolve()
    }

    /// Policy change pushed since the last frame, if any.
    pub fn take_motion_change(&mut self) -> Option<MotionPolicy> {
        self.motion.take_change()
    }

    /// Feedback for an activation whose callback already ran: marks the first
    /// gesture, dispatches the cue, then reports to analytics.
    pub fn acknowledge(&mut self, control: &str, cue: SfxEvent) -> DispatchOutcome {
        self.mark_interacted();
        let outcome = self.dispatcher.dispatch(cue);
        self.track(control, Some(cue));
        outcome
    }

    /// Persist `has_interacted = true` the first time. Returns true on that call.
    pub fn mark_interacted(&self) -> bool {
        let mut first = false;
        let result = self.preferences.update(&mut |prefs| {
            first = prefs.record_interaction();
        });

        match result {
            Ok(_) => {
                if first {
                    tracing::info!("First user interaction recorded, audio unlocked");
                }
                first
            }
            Err(e) => {
                tracing::warn!("Could not record first interaction: {}", e);
                false
            }
        }
    }

    /// Current preferences, or the silent fallback if the store is unreadable.
    pub fn preferences(&self) -> UiPreferences {
        self.preferences.load().unwrap_or_else(|e| {
            tracing::warn!("Could not read UI preferences: {}", e);
            UiPreferences::unavailable()
        })
    }

    pub fn sound_enabled(&self) -> bool {
        self.preferences().sound_enabled
    }

    /// Persist the user's sound toggle.
    pub fn set_sound_enabled(&self, enabled: bool) -> Result<(), ConfigError> {
        self.preferences
            .update(&mut |prefs| prefs.sound_enabled = enabled)
            .map(|_| tracing::info!("Sound effects {}", if enabled { "on" } else { "off" }))
    }

    /// Report an interaction to the analytics sink, if one is attached.
    pub fn track(&self, control: &str, cue: Option<SfxEvent>) {
        if let Some(sink) = &self.analytics {
            sink.track(&InteractionEvent::new(self.session_id, control, cue));
        }
    }
}
