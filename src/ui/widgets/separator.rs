//! Thin divider line.

use crate::accessibility::{AccessNode, AccessRole};
use crate::ui::theme::Theme;
use egui::{Response, Sense, Stroke, Ui, Vec2, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Separator {
    orientation: Orientation,
}

impl Separator {
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Widget for Separator {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        let stroke = Stroke::new(1.0, palette.border);

        let desired = match self.orientation {
            Orientation::Horizontal => Vec2::new(ui.available_width(), 9.0),
            Orientation::Vertical => Vec2::new(9.0, ui.available_height().min(32.0)),
        };
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if ui.is_rect_visible(rect) {
            match self.orientation {
                Orientation::Horizontal => ui.painter().hline(rect.x_range(), rect.center().y, stroke),
                Orientation::Vertical => ui.painter().vline(rect.center().x, rect.y_range(), stroke),
            };
        }

        response.widget_info(|| AccessNode::new(AccessRole::Separator, "").widget_info());
        response
    }
}
