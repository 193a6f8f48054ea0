//! Controlled dropdown.

use crate::accessibility::{AccessNode, AccessRole};
use egui::{Response, Ui};

/// Dropdown over `(value, label)` pairs.
///
/// The host owns `value`; `on_value_change` runs only when the user picks an
/// option different from the current one.
pub struct Select<'a, T> {
    id_salt: egui::Id,
    value: &'a T,
    options: &'a [(T, &'a str)],
    on_value_change: Box<dyn FnMut(T) + 'a>,
    placeholder: &'a str,
    enabled: bool,
}

impl<'a, T: PartialEq + Clone> Select<'a, T> {
    pub fn new(
        id_salt: impl std::hash::Hash,
        value: &'a T,
        options: &'a [(T, &'a str)],
        on_value_change: impl FnMut(T) + 'a,
    ) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            value,
            options,
            on_value_change: Box::new(on_value_change),
            placeholder: "Select…",
            enabled: true,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Label of the current value, or the placeholder when no option matches.
    pub fn selected_text(&self) -> &'a str {
        self.options
            .iter()
            .find(|(value, _)| value == self.value)
            .map(|(_, label)| *label)
            .unwrap_or(self.placeholder)
    }

    /// Apply a pick. Returns true if it changed the value and the callback ran.
    pub fn choose(&mut self, picked: &T) -> bool {
        if !self.enabled || picked == self.value {
            return false;
        }
        (self.on_value_change)(picked.clone());
        true
    }

    pub fn show(mut self, ui: &mut Ui) -> Response {
        let selected_text = self.selected_text();
        let current = self.value;
        let options = self.options;
        let mut picked = None;

        let inner = ui.add_enabled_ui(self.enabled, |ui| {
            egui::ComboBox::from_id_salt(self.id_salt)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (value, label) in options {
                        if ui.selectable_label(value == current, *label).clicked() {
                            picked = Some(value);
                        }
                    }
                })
                .response
        });

        let mut response = inner.inner;
        if let Some(value) = picked {
            if self.choose(value) {
                response.mark_changed();
            }
        }

        let node = AccessNode::new(AccessRole::Combobox, selected_text).with_disabled(!self.enabled);
        response.widget_info(|| node.widget_info());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [(u8, &str); 3] = [(1, "Easy"), (2, "Medium"), (3, "Hard")];

    #[test]
    fn test_choose_fires_only_on_change() {
        let mut changes = Vec::new();
        {
            let mut select = Select::new("level", &2, &LEVELS, |v| changes.push(v));
            assert!(!select.choose(&2));
            assert!(select.choose(&3));
        }
        assert_eq!(changes, vec![3]);
    }

    #[test]
    fn test_selected_text_falls_back_to_placeholder() {
        let select = Select::new("level", &9, &LEVELS, |_| {}).placeholder("Pick one");
        assert_eq!(select.selected_text(), "Pick one");
        assert_eq!(Select::new("level", &1, &LEVELS, |_| {}).selected_text(), "Easy");
    }

    #[test]
    fn test_disabled_never_fires() {
        let mut fired = false;
        {
            let mut select = Select::new("level", &1, &LEVELS, |_| fired = true).enabled(false);
            assert!(!select.choose(&3));
        }
        assert!(!fired);
    }
}
