//! Radio options and the group that owns their selection.
//!
//! A bare [`RadioOption`] knows nothing about its siblings: it renders
//! `selected` and reports "I was chosen". [`RadioGroup`] owns the single
//! current value and derives every option's `selected` flag from it, so two
//! options can never both be checked.

use crate::accessibility::{AccessNode, AccessRole, FocusIndicatorStyle};
use crate::motion::{MotionPolicy, PressFeedback};
use crate::ui::theme::{Theme, MIN_TOUCH_TARGET};
use egui::{Align2, FontId, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget};

/// Layout of a radio option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioVariant {
    /// Indicator dot followed by the label
    #[default]
    Default,
    /// Large centered label, no dot
    Tile,
}

const TILE_MIN: Vec2 = Vec2::new(120.0, 72.0);
const DOT_RADIUS: f32 = 10.0;

/// One option with `role="radio"`.
pub struct RadioOption<'a> {
    label: &'a str,
    selected: bool,
    on_select: Box<dyn FnMut() + 'a>,
    enabled: bool,
    policy: MotionPolicy,
    variant: RadioVariant,
}

impl<'a> RadioOption<'a> {
    pub fn new(label: &'a str, selected: bool, on_select: impl FnMut() + 'a) -> Self {
        Self {
            label,
            selected,
            on_select: Box::new(on_select),
            enabled: true,
            policy: MotionPolicy::Full,
            variant: RadioVariant::Default,
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

    pub fn variant(mut self, variant: RadioVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn access_node(&self) -> AccessNode {
        AccessNode::new(AccessRole::Radio, self.label)
            .with_checked(self.selected)
            .with_disabled(!self.enabled)
    }

    /// Handle a click or keyboard activation. Returns true if `on_select` ran.
    pub fn activate(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        (self.on_select)();
        true
    }
}

impl Widget for RadioOption<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let feedback = PressFeedback::new(self.policy, self.enabled);
        let tile = self.variant == RadioVariant::Tile;
        let font = FontId::proportional(if tile { 22.0 } else { 16.0 });

        let label_size = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), palette.text_primary)
            .size();

        let desired = if tile {
            (label_size + Vec2::splat(32.0)).max(TILE_MIN)
        } else {
            Vec2::new(
                DOT_RADIUS * 2.0 + 10.0 + label_size.x + 16.0,
                MIN_TOUCH_TARGET.max(label_size.y),
            )
        };

        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, mut response) = ui.allocate_exact_size(desired, sense);

        if ui.is_rect_visible(rect) {
            let pressed = self.enabled && response.is_pointer_button_down_on();
            let scale = feedback.animated_scale(ui.ctx(), response.id, pressed);
            let rect = egui::Rect::from_center_size(rect.center(), rect.size() * scale);

            let accent = if self.selected {
                palette.primary
            } else {
                palette.border
            };
            let text_color = if self.enabled {
                palette.text_primary
            } else {
                palette.text_muted
            };

            if tile {
                let fill = if self.selected {
                    palette.accent
                } else if response.hovered() && self.enabled {
                    palette.accent.gamma_multiply(0.6)
                } else {
                    palette.card
                };
                ui.painter().rect_filled(rect, 16.0, fill);
                ui.painter().rect_stroke(
                    rect,
                    16.0,
                    Stroke::new(if self.selected { 3.0 } else { 1.5 }, accent),
                    StrokeKind::Inside,
                );
                ui.painter()
                    .text(rect.center(), Align2::CENTER_CENTER, self.label, font, text_color);
            } else {
                let dot_center = egui::pos2(rect.left() + DOT_RADIUS + 2.0, rect.center().y);
                ui.painter()
                    .circle_stroke(dot_center, DOT_RADIUS, Stroke::new(2.0, accent));
                if self.selected {
                    ui.painter()
                        .circle_filled(dot_center, DOT_RADIUS * 0.5, palette.primary);
                }
                ui.painter().text(
                    egui::pos2(dot_center.x + DOT_RADIUS + 10.0, rect.center().y),
                    Align2::LEFT_CENTER,
                    self.label,
                    font,
                    text_color,
                );
            }

            FocusIndicatorStyle::for_palette(&palette)
                .with_corner_radius(if tile { 16.0 } else { 8.0 })
                .paint_if_focused(ui, &response, rect);
        }

        let node = self.access_node();
        if response.clicked() && self.activate() {
            response.mark_changed();
        }

        response.widget_info(|| node.widget_info());
        response
    }
}

/// Group with `role="radiogroup"` owning the current value.
pub struct RadioGroup<'a, T> {
    label: &'a str,
    value: Option<&'a T>,
    on_value_change: Box<dyn FnMut(T) + 'a>,
    enabled: bool,
    policy: MotionPolicy,
    variant: RadioVariant,
    horizontal: bool,
}

impl<'a, T: PartialEq + Clone> RadioGroup<'a, T> {
    /// `value` is the host's current choice, `None` while nothing is chosen.
    pub fn new(label: &'a str, value: Option<&'a T>, on_value_change: impl FnMut(T) + 'a) -> Self {
        Self {
            label,
            value,
            on_value_change: Box::new(on_value_change),
            enabled: true,
            policy: MotionPolicy::Full,
            variant: RadioVariant::Default,
            horizontal: false,
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

    pub fn variant(mut self, variant: RadioVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Lay options out in a wrapping row instead of a column.
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_options: impl FnOnce(&mut RadioGroupScope<'a, T>, &mut Ui) -> R,
    ) -> RadioGroupResponse<R> {
        let group = AccessNode::new(AccessRole::RadioGroup, self.label)
            .with_disabled(!self.enabled);
        let horizontal = self.horizontal;
        let mut scope = RadioGroupScope {
            value: self.value,
            on_value_change: self.on_value_change,
            enabled: self.enabled,
            policy: self.policy,
            variant: self.variant,
            options: Vec::new(),
        };

        let inner = if horizontal {
            ui.horizontal_wrapped(|ui| add_options(&mut scope, ui))
        } else {
            ui.vertical(|ui| add_options(&mut scope, ui))
        };
        inner.response.widget_info(|| group.widget_info());

        RadioGroupResponse {
            inner: inner.inner,
            response: inner.response,
            options: scope.options,
        }
    }
}

/// Handle passed to the closure of [`RadioGroup::show`].
pub struct RadioGroupScope<'a, T> {
    value: Option<&'a T>,
    on_value_change: Box<dyn FnMut(T) + 'a>,
    enabled: bool,
    policy: MotionPolicy,
    variant: RadioVariant,
    options: Vec<AccessNode>,
}

impl<T: PartialEq + Clone> RadioGroupScope<'_, T> {
    pub fn is_selected(&self, value: &T) -> bool {
        self.value == Some(value)
    }

    pub fn option(&mut self, ui: &mut Ui, value: T, label: &str) -> Response {
        self.option_enabled(ui, value, label, true)
    }

    /// Add an option that can be disabled on its own.
    pub fn option_enabled(&mut self, ui: &mut Ui, value: T, label: &str, enabled: bool) -> Response {
        let selected = self.is_selected(&value);
        let mut chosen = false;

        let option = RadioOption::new(label, selected, || chosen = true)
            .enabled(self.enabled && enabled)
            .motion_policy(self.policy)
            .variant(self.variant);
        self.options.push(option.access_node());
        let response = ui.add(option);

        if chosen {
            (self.on_value_change)(value);
        }
        response
    }
}

/// Output of [`RadioGroup::show`].
pub struct RadioGroupResponse<R> {
    pub inner: R,
    pub response: Response,
    /// Accessible state of each option, in render order
    pub options: Vec<AccessNode>,
}

impl<R> RadioGroupResponse<R> {
    /// Options currently exposing `aria-checked="true"`.
    pub fn checked_count(&self) -> usize {
        self.options
            .iter()
            .filter(|node| node.checked == Some(true))
            .count()
    }
}
