//! Accessible roles and per-control state snapshots.

use egui::accesskit::Role;
use egui::{Response, WidgetInfo, WidgetType};

/// Accessible role hints, mirroring the ARIA roles the controls expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessRole {
    /// Generic widget
    #[default]
    Generic,
    /// Button (activatable)
    Button,
    /// Two-state toggle
    Switch,
    /// One option within a mutually exclusive group
    Radio,
    /// Container of radio options
    RadioGroup,
    /// Tab trigger
    Tab,
    /// Container of tab triggers
    TabList,
    /// Content pane bound to a tab
    TabPanel,
    /// Determinate progress indicator
    ProgressBar,
    /// Urgent message region
    Alert,
    /// Small status label
    Status,
    /// Visual divider
    Separator,
    /// Caption bound to a control
    Label,
    /// Dropdown choice
    Combobox,
    /// Multi-line text input
    Textbox,
}

impl AccessRole {
    /// The ARIA role string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRole::Generic => "generic",
            AccessRole::Button => "button",
            AccessRole::Switch => "switch",
            AccessRole::Radio => "radio",
            AccessRole::RadioGroup => "radiogroup",
            AccessRole::Tab => "tab",
            AccessRole::TabList => "tablist",
            AccessRole::TabPanel => "tabpanel",
            AccessRole::ProgressBar => "progressbar",
            AccessRole::Alert => "alert",
            AccessRole::Status => "status",
            AccessRole::Separator => "separator",
            AccessRole::Label => "label",
            AccessRole::Combobox => "combobox",
            AccessRole::Textbox => "textbox",
        }
    }

    /// Closest egui widget type for the AccessKit bridge.
    fn widget_type(&self) -> WidgetType {
        match self {
            AccessRole::Button => WidgetType::Button,
            AccessRole::Switch => WidgetType::Checkbox,
            AccessRole::Radio => WidgetType::RadioButton,
            AccessRole::RadioGroup => WidgetType::RadioGroup,
            AccessRole::Tab => WidgetType::SelectableLabel,
            AccessRole::ProgressBar => WidgetType::ProgressIndicator,
            AccessRole::Label | AccessRole::Status | AccessRole::Alert => WidgetType::Label,
            AccessRole::Combobox => WidgetType::ComboBox,
            AccessRole::Textbox => WidgetType::TextEdit,
            AccessRole::Generic
            | AccessRole::TabList
            | AccessRole::TabPanel
            | AccessRole::Separator => WidgetType::Other,
        }
    }

    /// AccessKit role for roles `widget_type` can only approximate.
    pub fn platform_role(&self) -> Option<Role> {
        match self {
            AccessRole::Switch => Some(Role::Switch),
            AccessRole::Tab => Some(Role::Tab),
            AccessRole::TabList => Some(Role::TabList),
            AccessRole::TabPanel => Some(Role::TabPanel),
            AccessRole::Alert => Some(Role::Alert),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of what a control exposes to assistive technology.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessNode {
    pub role: AccessRole,
    /// Accessible name
    pub label: String,
    /// `aria-checked` for switches and radios
    pub checked: Option<bool>,
    /// `aria-selected` for tabs
    pub selected: Option<bool>,
    pub disabled: bool,
    /// `aria-valuenow` for progress bars
    pub value_now: Option<f32>,
}

impl AccessNode {
    pub fn new(role: AccessRole, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
            checked: None,
            selected: None,
            disabled: false,
            value_now: None,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value_now = Some(value);
        self
    }

    /// `aria-checked` attribute value, if the role carries one.
    pub fn aria_checked(&self) -> Option<&'static str> {
        self.checked.map(bool_attr)
    }

    /// `aria-selected` attribute value, if the role carries one.
    pub fn aria_selected(&self) -> Option<&'static str> {
        self.selected.map(bool_attr)
    }

    /// Widget info handed to egui's accessibility output.
    pub fn widget_info(&self) -> WidgetInfo {
        let typ = self.role.widget_type();
        let enabled = !self.disabled;
        let mut info = match self.checked.or(self.selected) {
            Some(state) => WidgetInfo::selected(typ, enabled, state, &self.label),
            None => WidgetInfo::labeled(typ, enabled, &self.label),
        };
        info.value = self.value_now.map(f64::from);
        info
    }

    /// Publish on `response`. egui has no widget type for switches or tabs, so
    /// the AccessKit role is corrected after the widget info is written.
    pub fn expose(&self, response: &Response) {
        response.widget_info(|| self.widget_info());
        if let Some(role) = self.role.platform_role() {
            response
                .ctx
                .accesskit_node_builder(response.id, |node| node.set_role(role));
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_checked_strings() {
        let on = AccessNode::new(AccessRole::Switch, "Sound").with_checked(true);
        let off = AccessNode::new(AccessRole::Radio, "Cat").with_checked(false);
        assert_eq!(on.aria_checked(), Some("true"));
        assert_eq!(off.aria_checked(), Some("false"));
        assert_eq!(AccessNode::new(AccessRole::Button, "Go").aria_checked(), None);
    }

    #[test]
    fn test_widget_info_carries_state() {
        let node = AccessNode::new(AccessRole::Radio, "Dog")
            .with_checked(true)
            .with_disabled(true);
        let info = node.widget_info();
        assert_eq!(info.typ, WidgetType::RadioButton);
        assert_eq!(info.selected, Some(true));
        assert!(!info.enabled);
        assert_eq!(info.label.as_deref(), Some("Dog"));
    }

    #[test]
    fn test_role_strings() {
        assert_eq!(AccessRole::Switch.to_string(), "switch");
        assert_eq!(AccessRole::TabPanel.as_str(), "tabpanel");
    }
}
