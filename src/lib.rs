//! Lexikid - controlled interaction and feedback layer for young learners.
//!
//! Motion-aware controls (pressable, switch, radio, tabs) that never own their
//! state, a cooldown-gated sound dispatcher, and the presentational containers
//! the exercise screens are built from.

pub mod accessibility;
pub mod analytics;
pub mod audio;
pub mod interaction;
pub mod motion;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use audio::{DispatchOutcome, FeedbackDispatcher, SfxEvent};
pub use interaction::InteractionLayer;
pub use motion::{MotionPolicy, MotionPolicyResolver, ReducedMotionSignal};
pub use storage::{PreferenceStore, UiPreferences};
pub use ui::widgets::{MotionPressable, RadioGroup, RadioOption, Switch, Tabs, TabsError};
