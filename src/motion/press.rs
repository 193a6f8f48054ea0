//! Press-down feedback for pressable controls.
//!
//! Motion is cosmetic only: nothing here decides whether a click is handled.

use super::MotionPolicy;
use std::time::Duration;

/// Scale applied while pressed (2% shrink).
pub const PRESS_SCALE: f32 = 0.98;

/// Duration of the press transition.
pub const PRESS_DURATION: Duration = Duration::from_millis(120);

/// A timed scale transform handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressTransform {
    pub scale: f32,
    pub duration: Duration,
}

impl PressTransform {
    /// No transform at all.
    pub const NONE: PressTransform = PressTransform {
        scale: 1.0,
        duration: Duration::ZERO,
    };

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }
}

/// Decides the press transform for one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressFeedback {
    policy: MotionPolicy,
    enabled: bool,
}

impl PressFeedback {
    pub fn new(policy: MotionPolicy, enabled: bool) -> Self {
        Self { policy, enabled }
    }

    pub fn is_animated(&self) -> bool {
        self.enabled && self.policy.is_animated()
    }

    /// Transform to apply on press-down.
    pub fn on_press(&self) -> PressTransform {
        if self.is_animated() {
            PressTransform {
                scale: PRESS_SCALE,
                duration: PRESS_DURATION,
            }
        } else {
            PressTransform::NONE
        }
    }

    /// Target scale for the current pointer state.
    pub fn target_scale(&self, pressed: bool) -> f32 {
        if pressed {
            self.on_press().scale
        } else {
            1.0
        }
    }

    /// Animate towards the target scale, or snap when motion is off.
    pub fn animated_scale(&self, ctx: &egui::Context, id: egui::Id, pressed: bool) -> f32 {
        let target = self.target_scale(pressed);
        if self.is_animated() {
            ctx.animate_value_with_time(id.with("press_scale"), target, PRESS_DURATION.as_secs_f32())
        } else {
            target
        }
    }

    /// Shrink `rect` around its center by `scale`.
    pub fn apply(rect: egui::Rect, scale: f32) -> egui::Rect {
        egui::Rect::from_center_size(rect.center(), rect.size() * scale)
    }
}
