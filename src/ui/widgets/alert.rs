//! Inline alert box.

use crate::accessibility::{AccessNode, AccessRole};
use crate::ui::theme::{AlertVariant, Theme};
use egui::{Margin, Response, RichText, Stroke, Ui, Widget};

/// Message region with `role="alert"`.
pub struct Alert<'a> {
    title: &'a str,
    description: Option<&'a str>,
    icon: Option<&'a str>,
    variant: AlertVariant,
}

impl<'a> Alert<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            icon: None,
            variant: AlertVariant::Default,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn access_node(&self) -> AccessNode {
        let label = match self.description {
            Some(description) => format!("{}: {}", self.title, description),
            None => self.title.to_string(),
        };
        AccessNode::new(AccessRole::Alert, label)
    }
}

impl Widget for Alert<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let (fill, title_color, border) = self.variant.colors(&palette);
        let node = self.access_node();

        let response = egui::Frame::new()
            .fill(fill)
            .stroke(Stroke::new(1.0, border))
            .corner_radius(12.0)
            .inner_margin(Margin::same(14))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if let Some(icon) = self.icon {
                        ui.label(RichText::new(icon).size(18.0).color(title_color));
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new(self.title).strong().color(title_color));
                        if let Some(description) = self.description {
                            ui.label(RichText::new(description).color(palette.text_secondary));
                        }
                    });
                });
            })
            .response;

        node.expose(&response);
        response
    }
}
