//! Card container with header, content and footer slots.

use crate::ui::theme::Theme;
use egui::{InnerResponse, Margin, RichText, Stroke, Ui};

/// Bordered panel. Title and description form the header; the closure passed
/// to [`Card::show`] is the content.
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        let palette = Theme::from_visuals(ui.visuals()).palette();

        egui::Frame::new()
            .fill(palette.card)
            .stroke(Stroke::new(1.0, palette.border))
            .corner_radius(16.0)
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                if self.title.is_some() || self.description.is_some() {
                    ui.vertical(|ui| {
                        if let Some(title) = self.title {
                            ui.label(RichText::new(title).size(22.0).strong().color(palette.text_primary));
                        }
                        if let Some(description) = self.description {
                            ui.label(RichText::new(description).size(15.0).color(palette.text_secondary));
                        }
                    });
                    ui.add_space(12.0);
                }
                add_contents(ui)
            })
    }

    /// Footer row, laid out right to left so actions sit at the trailing edge.
    pub fn footer<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), add_contents)
            .inner
    }
}
