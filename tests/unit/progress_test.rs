//! Unit tests for progress clamping.

use lexikid::ui::widgets::{clamp_percent, Progress};

#[test]
fn test_width_labels() {
    assert_eq!(Progress::new(-10.0).width_label(), "0%");
    assert_eq!(Progress::new(50.0).width_label(), "50%");
    assert_eq!(Progress::new(150.0).width_label(), "100%");
}

#[test]
fn test_clamp_percent_edges() {
    assert_eq!(clamp_percent(0.0), 0.0);
    assert_eq!(clamp_percent(100.0), 100.0);
    assert_eq!(clamp_percent(f32::INFINITY), 100.0);
    assert_eq!(clamp_percent(f32::NEG_INFINITY), 0.0);
    assert_eq!(clamp_percent(f32::NAN), 0.0);
}
