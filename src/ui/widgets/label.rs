//! Caption bound to a control.

use crate::ui::theme::Theme;
use egui::{Response, RichText, Ui, Widget};

/// Text label for a form control.
///
/// Render it, then pass its response to [`FieldLabel::bind`] together with the
/// control's response so assistive technology reads the caption as the
/// control's name.
pub struct FieldLabel<'a> {
    text: &'a str,
}

impl<'a> FieldLabel<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn bind(label: &Response, control: Response) -> Response {
        control.labelled_by(label.id)
    }
}

impl Widget for FieldLabel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Theme::from_visuals(ui.visuals()).palette();
        ui.label(
            RichText::new(self.text)
                .size(14.0)
                .strong()
                .color(palette.text_primary),
        )
    }
}
