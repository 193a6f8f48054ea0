//! Multi-line text input.

use crate::ui::theme::Theme;
use egui::{Response, RichText, Ui, Widget};

pub struct Textarea<'a> {
    text: &'a mut String,
    placeholder: &'a str,
    rows: usize,
    char_limit: Option<usize>,
    enabled: bool,
}

impl<'a> Textarea<'a> {
    pub fn new(text: &'a mut String) -> Self {
        Self {
            text,
            placeholder: "",
            rows: 4,
            char_limit: None,
            enabled: true,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for Textarea<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();

        let mut edit = egui::TextEdit::multiline(self.text)
            .hint_text(RichText::new(self.placeholder).color(palette.text_muted))
            .desired_rows(self.rows)
            .desired_width(f32::INFINITY)
            .margin(egui::Margin::symmetric(12, 10));
        if let Some(limit) = self.char_limit {
            edit = edit.char_limit(limit);
        }

        ui.add_enabled(self.enabled, edit)
    }
}
