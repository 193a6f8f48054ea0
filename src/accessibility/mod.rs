//! Accessibility contract shared by every interactive control.
//!
//! Each control describes itself as an [`AccessNode`] (role plus state such as
//! `aria-checked`) and forwards the same information to egui's AccessKit
//! bridge, so assistive technology and tests can query state without looking
//! at styling.

pub mod focus;
pub mod node;

pub use focus::FocusIndicatorStyle;
pub use node::{AccessNode, AccessRole};
