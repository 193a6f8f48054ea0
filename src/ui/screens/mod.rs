//! Demo screens composed from the widgets.

pub mod exercise;
pub mod reading;
pub mod settings;

pub use exercise::{ExerciseScreen, Question, QuizPhase};
pub use reading::{ReadingLevel, ReadingScreen};
pub use settings::{SettingsChange, SettingsScreen};

/// Top-level tab of the demo app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Exercise,
    Reading,
    Settings,
}

impl AppTab {
    pub const ALL: [AppTab; 3] = [AppTab::Exercise, AppTab::Reading, AppTab::Settings];

    /// Value used by the tab trigger and pane.
    pub fn value(&self) -> &'static str {
        match self {
            AppTab::Exercise => "exercise",
            AppTab::Reading => "reading",
            AppTab::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Exercise => "Quiz",
            AppTab::Reading => "Reading",
            AppTab::Settings => "Settings",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.value() == value)
    }
}
