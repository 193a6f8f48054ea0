//! Unit test modules.

mod feedback_dispatch_test;
mod motion_test;
mod preferences_test;
mod progress_test;
