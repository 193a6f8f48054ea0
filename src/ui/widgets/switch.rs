//! Controlled two-state toggle.

use crate::accessibility::{AccessNode, AccessRole, FocusIndicatorStyle};
use crate::motion::{MotionPolicy, PressFeedback, PRESS_DURATION};
use crate::ui::theme::{Theme, MIN_TOUCH_TARGET};
use egui::{Align2, FontId, Rect, Response, Sense, Ui, Vec2, Widget};

const TRACK_SIZE: Vec2 = Vec2::new(52.0, 30.0);
const KNOB_INSET: f32 = 3.0;

/// Toggle with `role="switch"`.
///
/// Holds no state: `checked` comes from the host and every activation calls
/// `on_checked_change(!checked)` exactly once. The visual only flips after
/// the host updates `checked`.
pub struct Switch<'a> {
    label: &'a str,
    checked: bool,
    on_checked_change: Box<dyn FnMut(bool) + 'a>,
    enabled: bool,
    policy: MotionPolicy,
}

impl<'a> Switch<'a> {
    pub fn new(label: &'a str, checked: bool, on_checked_change: impl FnMut(bool) + 'a) -> Self {
        Self {
            label,
            checked,
            on_checked_change: Box::new(on_checked_change),
            enabled: true,
            policy: MotionPolicy::Full,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn motion_policy(mut self, policy: MotionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn access_node(&self) -> AccessNode {
        AccessNode::new(AccessRole::Switch, self.label)
            .with_checked(self.checked)
            .with_disabled(!self.enabled)
    }

    /// Handle a click or keyboard activation. Returns true if the callback ran.
    pub fn activate(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        (self.on_checked_change)(!self.checked);
        true
    }
}

impl Widget for Switch<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let feedback = PressFeedback::new(self.policy, self.enabled);
        let font = FontId::proportional(16.0);

        let label_size = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), palette.text_primary)
            .size();
        let spacing = if self.label.is_empty() { 0.0 } else { 12.0 };
        let desired = Vec2::new(
            TRACK_SIZE.x + spacing + label_size.x,
            MIN_TOUCH_TARGET.max(label_size.y),
        );

        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, mut response) = ui.allocate_exact_size(desired, sense);

        if ui.is_rect_visible(rect) {
            let track = Rect::from_min_size(
                egui::pos2(rect.left(), rect.center().y - TRACK_SIZE.y / 2.0),
                TRACK_SIZE,
            );
            let pressed = self.enabled && response.is_pointer_button_down_on();
            let scale = feedback.animated_scale(ui.ctx(), response.id, pressed);
            let track = PressFeedback::apply(track, scale);

            let t = if self.policy.is_animated() {
                ui.ctx().animate_bool_with_time(
                    response.id.with("knob"),
                    self.checked,
                    PRESS_DURATION.as_secs_f32(),
                )
            } else if self.checked {
                1.0
            } else {
                0.0
            };

            let mut fill = if self.checked {
                palette.primary
            } else {
                palette.border
            };
            if !self.enabled {
                fill = fill.gamma_multiply(0.5);
            }

            let radius = track.height() / 2.0;
            ui.painter().rect_filled(track, radius, fill);

            let knob_radius = radius - KNOB_INSET;
            let x = egui::lerp(
                (track.left() + radius)..=(track.right() - radius),
                t,
            );
            ui.painter().circle_filled(
                egui::pos2(x, track.center().y),
                knob_radius,
                egui::Color32::WHITE,
            );

            if !self.label.is_empty() {
                let color = if self.enabled {
                    palette.text_primary
                } else {
                    palette.text_muted
                };
                ui.painter().text(
                    egui::pos2(track.right() + spacing, rect.center().y),
                    Align2::LEFT_CENTER,
                    self.label,
                    font,
                    color,
                );
            }

            FocusIndicatorStyle::for_palette(&palette)
                .with_corner_radius(radius)
                .paint_if_focused(ui, &response, track);
        }

        let node = self.access_node();
        if response.clicked() && self.activate() {
            response.mark_changed();
        }

        node.expose(&response);
        response
    }
}
