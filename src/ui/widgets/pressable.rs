//! Motion-aware pressable button.
//!
//! Every interactive control builds on the same press behaviour: a 2% shrink
//! while held when motion is on, nothing when it is reduced. Click handling
//! never depends on the motion policy; only `enabled` gates it.

use crate::accessibility::{AccessNode, AccessRole, FocusIndicatorStyle};
use crate::motion::{MotionPolicy, PressFeedback};
use crate::ui::theme::{ButtonSize, ButtonStyle, ButtonVariant, Theme};
use egui::{Align2, FontId, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget};

/// A button whose press animation follows a [`MotionPolicy`].
pub struct MotionPressable<'a> {
    /// Button text
    text: &'a str,
    /// Accessible label for screen readers (if different from text)
    accessible_label: Option<&'a str>,
    /// Optional icon (rendered before text)
    icon: Option<&'a str>,
    policy: MotionPolicy,
    variant: ButtonVariant,
    size: ButtonSize,
    enabled: bool,
}

impl<'a> MotionPressable<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            accessible_label: None,
            icon: None,
            policy: MotionPolicy::Full,
            variant: ButtonVariant::Default,
            size: ButtonSize::Default,
            enabled: true,
        }
    }

    /// Set the accessible label for screen readers.
    pub fn accessible_label(mut self, label: &'a str) -> Self {
        self.accessible_label = Some(label);
        self
    }

    /// Set an icon to display before the text.
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn motion_policy(mut self, policy: MotionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn press_feedback(&self) -> PressFeedback {
        PressFeedback::new(self.policy, self.enabled)
    }

    pub fn access_node(&self) -> AccessNode {
        AccessNode::new(AccessRole::Button, self.accessible_label.unwrap_or(self.text))
            .with_disabled(!self.enabled)
    }
}

impl Widget for MotionPressable<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let feedback = self.press_feedback();
        let node = self.access_node();
        let Self {
            text,
            icon,
            variant,
            size,
            enabled,
            ..
        } = self;

        let palette = Theme::from_visuals(ui.visuals()).palette();
        let style = ButtonStyle::resolve(variant, &palette);
        let font = FontId::proportional(size.font_size());

        let text_size = ui
            .painter()
            .layout_no_wrap(text.to_string(), font.clone(), style.text)
            .size();
        let icon_width = if icon.is_some() {
            size.font_size() + 6.0
        } else {
            0.0
        };
        let content = Vec2::new(text_size.x + icon_width, text_size.y) + size.padding() * 2.0;
        let desired = content.max(size.min_size());

        // Disabled buttons only sense hover, so they can never report a click
        let sense = if enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(desired, sense);

        if ui.is_rect_visible(rect) {
            let pressed = enabled && response.is_pointer_button_down_on();
            let scale = feedback.animated_scale(ui.ctx(), response.id, pressed);
            let draw_rect = PressFeedback::apply(rect, scale);

            let bg = if !enabled {
                style.bg.gamma_multiply(0.5)
            } else if pressed {
                style.bg_pressed
            } else if response.hovered() {
                style.bg_hover
            } else {
                style.bg
            };

            ui.painter().rect_filled(draw_rect, style.rounding, bg);
            if let Some(border) = style.border {
                ui.painter().rect_stroke(
                    draw_rect,
                    style.rounding,
                    Stroke::new(1.0, border),
                    StrokeKind::Inside,
                );
            }

            let text_color = if enabled {
                style.text
            } else {
                style.text.gamma_multiply(0.5)
            };

            let center = draw_rect.center();
            if let Some(icon_str) = icon {
                let left = center.x - (text_size.x + icon_width) / 2.0;
                ui.painter().text(
                    egui::pos2(left, center.y),
                    Align2::LEFT_CENTER,
                    icon_str,
                    font.clone(),
                    text_color,
                );
                ui.painter().text(
                    egui::pos2(left + icon_width, center.y),
                    Align2::LEFT_CENTER,
                    text,
                    font,
                    text_color,
                );
            } else {
                ui.painter()
                    .text(center, Align2::CENTER_CENTER, text, font, text_color);
            }

            if style.underline && response.hovered() {
                let y = center.y + text_size.y / 2.0;
                ui.painter().line_segment(
                    [
                        egui::pos2(center.x - text_size.x / 2.0, y),
                        egui::pos2(center.x + text_size.x / 2.0, y),
                    ],
                    Stroke::new(1.0, text_color),
                );
            }

            FocusIndicatorStyle::for_palette(&palette)
                .with_corner_radius(style.rounding)
                .paint_if_focused(ui, &response, rect);
        }

        response.widget_info(|| node.widget_info());
        response
    }
}
