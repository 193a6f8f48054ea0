//! Small status pill.

use crate::accessibility::{AccessNode, AccessRole};
use crate::ui::theme::{BadgeVariant, Theme};
use egui::{Align2, FontId, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget};

pub struct Badge<'a> {
    text: &'a str,
    variant: BadgeVariant,
}

impl<'a> Badge<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            variant: BadgeVariant::Default,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl Widget for Badge<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let (fill, text_color, border) = self.variant.colors(&palette);
        let font = FontId::proportional(12.0);

        let galley = ui
            .painter()
            .layout_no_wrap(self.text.to_string(), font.clone(), text_color);
        let desired = galley.size() + Vec2::new(16.0, 6.0);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if ui.is_rect_visible(rect) {
            let radius = rect.height() / 2.0;
            ui.painter().rect_filled(rect, radius, fill);
            if let Some(border) = border {
                ui.painter()
                    .rect_stroke(rect, radius, Stroke::new(1.0, border), StrokeKind::Inside);
            }
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.text, font, text_color);
        }

        let node = AccessNode::new(AccessRole::Status, self.text);
        response.widget_info(|| node.widget_info());
        response
    }
}
