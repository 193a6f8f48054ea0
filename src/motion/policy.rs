//! Reduced-motion signal and the interaction mode derived from it.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Environment variable consulted when no config override is set.
pub const REDUCE_MOTION_ENV: &str = "LEXIKID_REDUCE_MOTION";

/// Whether interactive press feedback is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPolicy {
    #[default]
    Full,
    Reduced,
}

impl MotionPolicy {
    /// Map the platform's reduced-motion flag to a policy.
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPolicy::Reduced
        } else {
            MotionPolicy::Full
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, MotionPolicy::Full)
    }
}

impl std::fmt::Display for MotionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionPolicy::Full => write!(f, "full"),
            MotionPolicy::Reduced => write!(f, "reduced"),
        }
    }
}

/// Owner side of the platform reduced-motion signal.
///
/// Every change is pushed to all resolvers; when a repaint context is
/// attached the UI is woken so dependents re-render with the new policy.
#[derive(Debug)]
pub struct ReducedMotionSignal {
    tx: watch::Sender<bool>,
    repaint: Option<egui::Context>,
}

impl ReducedMotionSignal {
    pub fn new(reduced: bool) -> Self {
        let (tx, _rx) = watch::channel(reduced);
        Self { tx, repaint: None }
    }

    /// Wake this egui context whenever the signal changes.
    pub fn attach_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    /// Update the signal. Returns true if the value actually changed.
    pub fn set(&self, reduced: bool) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == reduced {
                false
            } else {
                *current = reduced;
                true
            }
        });

        if changed {
            tracing::info!(
                "Motion policy changed to {}",
                MotionPolicy::from_reduced(reduced)
            );
            if let Some(ctx) = &self.repaint {
                ctx.request_repaint();
            }
        }

        changed
    }

    pub fn is_reduced(&self) -> bool {
        *self.tx.borrow()
    }

    /// Create a resolver subscribed to this signal.
    pub fn resolver(&self) -> MotionPolicyResolver {
        MotionPolicyResolver {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read side: derives the current [`MotionPolicy`] from the signal.
#[derive(Debug, Clone)]
pub struct MotionPolicyResolver {
    rx: watch::Receiver<bool>,
}

impl MotionPolicyResolver {
    /// Current policy. No caching beyond the signal itself.
    pub fn resolve(&self) -> MotionPolicy {
        MotionPolicy::from_reduced(*self.rx.borrow())
    }

    /// The new policy if the signal changed since this resolver last looked.
    pub fn take_change(&mut self) -> Option<MotionPolicy> {
        match self.rx.has_changed() {
            Ok(true) => Some(MotionPolicy::from_reduced(*self.rx.borrow_and_update())),
            // Sender dropped: the last value stays authoritative.
            Ok(false) | Err(_) => None,
        }
    }
}

/// Parse a reduced-motion flag as written in the environment.
pub fn parse_motion_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" | "reduced" => Some(true),
        "0" | "false" | "no" | "off" | "full" | "no-preference" => Some(false),
        _ => None,
    }
}

/// Determine the platform reduced-motion preference at startup.
///
/// A config override wins; otherwise [`REDUCE_MOTION_ENV`] is read. Anything
/// unreadable degrades to full motion.
pub fn detect_reduced_motion(config_override: Option<bool>) -> bool {
    if let Some(reduced) = config_override {
        return reduced;
    }

    match std::env::var(REDUCE_MOTION_ENV) {
        Ok(raw) => parse_motion_flag(&raw).unwrap_or_else(|| {
            tracing::warn!("Ignoring unrecognised {}={:?}", REDUCE_MOTION_ENV, raw);
            false
        }),
        Err(_) => false,
    }
}
