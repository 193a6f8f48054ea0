//! egui user interface: theme, widgets and demo screens.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
