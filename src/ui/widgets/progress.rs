//! Progress bar.

use crate::accessibility::{AccessNode, AccessRole};
use crate::motion::{MotionPolicy, PRESS_DURATION};
use crate::ui::theme::Theme;
use egui::{Response, Sense, Ui, Vec2, Widget};

/// Clamp a percentage into `[0, 100]`. NaN counts as 0.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Horizontal bar with `role="progressbar"`.
pub struct Progress {
    value: f32,
    height: f32,
    policy: MotionPolicy,
}

impl Progress {
    /// `value` is a percentage; anything outside `[0, 100]` is clamped.
    pub fn new(value: f32) -> Self {
        Self {
            value: clamp_percent(value),
            height: 12.0,
            policy: MotionPolicy::Full,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn motion_policy(mut self, policy: MotionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Filled share of the track, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.value / 100.0
    }

    /// Width of the fill as a CSS-style percentage, e.g. `"50%"`.
    pub fn width_label(&self) -> String {
        format!("{}%", self.value.round() as u32)
    }

    pub fn access_node(&self) -> AccessNode {
        AccessNode::new(AccessRole::ProgressBar, self.width_label()).with_value(self.value)
    }
}

impl Widget for Progress {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let desired = Vec2::new(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if ui.is_rect_visible(rect) {
            let fraction = if self.policy.is_animated() {
                ui.ctx().animate_value_with_time(
                    response.id,
                    self.fraction(),
                    PRESS_DURATION.as_secs_f32() * 2.0,
                )
            } else {
                self.fraction()
            };

            let radius = self.height / 2.0;
            ui.painter().rect_filled(rect, radius, palette.secondary);

            if fraction > 0.0 {
                let mut fill = rect;
                fill.set_width(rect.width() * fraction);
                ui.painter().rect_filled(fill, radius, palette.primary);
            }
        }

        let node = self.access_node();
        response.widget_info(|| node.widget_info());
        response
    }
}
