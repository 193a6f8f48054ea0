//! Keyboard focus indicator drawn around focused controls.

use crate::ui::theme::Palette;
use egui::{Rect, Response, Stroke, StrokeKind, Ui};

/// Style for focus indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusIndicatorStyle {
    /// Stroke color of the ring
    pub color: egui::Color32,
    /// Width of the ring stroke
    pub width: f32,
    /// Corner radius for rounded rectangles
    pub corner_radius: f32,
    /// Offset from the widget bounds
    pub offset: f32,
}

impl Default for FocusIndicatorStyle {
    fn default() -> Self {
        Self::for_palette(&Palette::LIGHT)
    }
}

impl FocusIndicatorStyle {
    pub fn for_palette(palette: &Palette) -> Self {
        Self {
            color: palette.focus_ring,
            width: 2.0,
            corner_radius: 12.0,
            offset: 2.0,
        }
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.width, self.color)
    }

    /// Paint the ring around `rect` if `response` holds keyboard focus.
    pub fn paint_if_focused(&self, ui: &Ui, response: &Response, rect: Rect) {
        if response.has_focus() {
            ui.painter().rect_stroke(
                rect.expand(self.offset),
                self.corner_radius + self.offset,
                self.stroke(),
                StrokeKind::Outside,
            );
        }
    }
}
