//! Controlled tabs.
//!
//! The active value and its change callback belong to the host. Triggers and
//! panes are only reachable through the [`TabsScope`] handed out by
//! [`Tabs::show`], so a trigger or pane outside a tabs scope cannot be
//! written at all.
//!
//! Only the pane matching the active value runs; the others are not laid out,
//! hidden or kept alive. Fine for light tab content, not for panes that are
//! expensive to build every time they are shown.

use crate::accessibility::{AccessNode, AccessRole, FocusIndicatorStyle};
use crate::motion::{MotionPolicy, PressFeedback};
use crate::ui::theme::{Theme, MIN_TOUCH_TARGET};
use egui::{Align2, FontId, Id, Response, Sense, Ui, Vec2};

/// Structural misuse of a tabs scope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabsError {
    #[error("active tab {0:?} has no trigger in this tabs scope")]
    UnknownValue(String),

    #[error("tab value {0:?} is used by more than one trigger")]
    DuplicateTrigger(String),

    #[error("pane for active tab {0:?} was added before its trigger")]
    PaneBeforeTrigger(String),
}

/// Tabs container.
pub struct Tabs<'a> {
    id: Id,
    value: &'a str,
    on_value_change: Box<dyn FnMut(&str) + 'a>,
    policy: MotionPolicy,
}

impl<'a> Tabs<'a> {
    pub fn new(
        id_salt: impl std::hash::Hash,
        value: &'a str,
        on_value_change: impl FnMut(&str) + 'a,
    ) -> Self {
        Self {
            id: Id::new(id_salt),
            value,
            on_value_change: Box::new(on_value_change),
            policy: MotionPolicy::Full,
        }
    }

    pub fn motion_policy(mut self, policy: MotionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the scope. Fails when the active value matched no trigger or two
    /// triggers share a value.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut TabsScope<'a>, &mut Ui) -> R,
    ) -> Result<R, TabsError> {
        let mut scope = TabsScope {
            value: self.value,
            on_value_change: self.on_value_change,
            policy: self.policy,
            triggers: Vec::new(),
            duplicate: None,
            early_pane: None,
            mounted: None,
        };

        let inner = ui.push_id(self.id, |ui| add_contents(&mut scope, ui)).inner;
        scope.finish()?;
        Ok(inner)
    }
}

/// Handle to the enclosing tabs' selection.
pub struct TabsScope<'a> {
    value: &'a str,
    on_value_change: Box<dyn FnMut(&str) + 'a>,
    policy: MotionPolicy,
    triggers: Vec<String>,
    duplicate: Option<String>,
    /// Active pane requested while its trigger was still missing
    early_pane: Option<String>,
    mounted: Option<String>,
}

impl TabsScope<'_> {
    /// The active value.
    pub fn value(&self) -> &str {
        self.value
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.value == value
    }

    /// Pane rendered so far in this scope, if any.
    pub fn mounted_pane(&self) -> Option<&str> {
        self.mounted.as_deref()
    }

    /// Lay out triggers in a row with `role="tablist"`.
    pub fn list<R>(&mut self, ui: &mut Ui, add_triggers: impl FnOnce(&mut Self, &mut Ui) -> R) -> R {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let inner = egui::Frame::new()
            .fill(palette.accent)
            .corner_radius(14.0)
            .inner_margin(egui::Margin::same(4))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    add_triggers(self, ui)
                })
                .inner
            });
        AccessNode::new(AccessRole::TabList, "").expose(&inner.response);
        inner.inner
    }

    /// Trigger with `role="tab"` for `value`.
    pub fn trigger(&mut self, ui: &mut Ui, value: &str, label: &str) -> Response {
        self.trigger_enabled(ui, value, label, true)
    }

    pub fn trigger_enabled(&mut self, ui: &mut Ui, value: &str, label: &str, enabled: bool) -> Response {
        self.register(value);

        let selected = self.is_active(value);
        let mut response = paint_trigger(ui, label, selected, enabled, self.policy);

        if response.clicked() {
            self.activate(value);
            response.mark_changed();
        }

        let node = AccessNode::new(AccessRole::Tab, label)
            .with_selected(selected)
            .with_disabled(!enabled);
        node.expose(&response);
        response
    }

    /// Request a transition to `value`: one `on_value_change` call, no buffering.
    /// The new pane shows once the host passes the new value back in.
    pub fn activate(&mut self, value: &str) {
        tracing::trace!("Tab {:?} activated (current {:?})", value, self.value);
        (self.on_value_change)(value);
    }

    /// Pane with `role="tabpanel"`; runs `add_contents` only when `value` is
    /// active and a trigger for it was already added to this scope.
    ///
    /// Triggers must come first. An active pane added before its trigger is
    /// not shown and makes [`Tabs::show`] fail with
    /// [`TabsError::PaneBeforeTrigger`].
    pub fn content<R>(&mut self, ui: &mut Ui, value: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> Option<R> {
        if !self.is_active(value) {
            return None;
        }
        if !self.triggers.iter().any(|t| t == value) {
            if self.early_pane.is_none() {
                self.early_pane = Some(value.to_string());
            }
            return None;
        }

        self.mounted = Some(value.to_string());
        let inner = ui.push_id(("tabpanel", value), |ui| ui.scope(add_contents)).inner;
        AccessNode::new(AccessRole::TabPanel, value).expose(&inner.response);
        Some(inner.inner)
    }

    fn register(&mut self, value: &str) {
        if self.triggers.iter().any(|t| t == value) {
            if self.duplicate.is_none() {
                self.duplicate = Some(value.to_string());
            }
        } else {
            self.triggers.push(value.to_string());
        }
    }

    fn finish(self) -> Result<(), TabsError> {
        if let Some(duplicate) = self.duplicate {
            tracing::error!("Tab value {:?} registered twice", duplicate);
            return Err(TabsError::DuplicateTrigger(duplicate));
        }

        let registered = self.triggers.iter().any(|t| t == self.value);
        if let Some(pane) = self.early_pane.filter(|_| registered) {
            tracing::error!("Pane {:?} was added before its trigger", pane);
            return Err(TabsError::PaneBeforeTrigger(pane));
        }

        if !registered {
            tracing::error!(
                "Active tab {:?} matches none of the triggers {:?}",
                self.value,
                self.triggers
            );
            return Err(TabsError::UnknownValue(self.value.to_string()));
        }

        Ok(())
    }
}

fn paint_trigger(ui: &mut Ui, label: &str, selected: bool, enabled: bool, policy: MotionPolicy) -> Response {
    let palette = Theme::from_visuals(ui.visuals()).palette();
    let feedback = PressFeedback::new(policy, enabled);
    let font = FontId::proportional(16.0);

    let text_size = ui
        .painter()
        .layout_no_wrap(label.to_string(), font.clone(), palette.text_primary)
        .size();
    let desired = (text_size + Vec2::new(28.0, 12.0)).max(Vec2::splat(MIN_TOUCH_TARGET));

    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(desired, sense);

    if ui.is_rect_visible(rect) {
        let pressed = enabled && response.is_pointer_button_down_on();
        let scale = feedback.animated_scale(ui.ctx(), response.id, pressed);
        let draw_rect = PressFeedback::apply(rect, scale);

        if selected {
            ui.painter().rect_filled(draw_rect, 10.0, palette.panel);
        } else if enabled && response.hovered() {
            ui.painter()
                .rect_filled(draw_rect, 10.0, palette.panel.gamma_multiply(0.5));
        }

        let color = match (selected, enabled) {
            (_, false) => palette.text_muted,
            (true, true) => palette.text_primary,
            (false, true) => palette.text_secondary,
        };
        ui.painter()
            .text(draw_rect.center(), Align2::CENTER_CENTER, label, font, color);

        FocusIndicatorStyle::for_palette(&palette)
            .with_corner_radius(10.0)
            .paint_if_focused(ui, &response, rect);
    }

    response
}
