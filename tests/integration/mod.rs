//! Integration test modules.

mod audio_mock;
mod controls_test;
mod interaction_flow_test;
mod pointer_input_test;
mod tabs_flow_test;
