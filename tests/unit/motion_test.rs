//! Unit tests for motion policy resolution and press feedback.

use lexikid::motion::{
    parse_motion_flag, MotionPolicy, PressFeedback, ReducedMotionSignal, PRESS_DURATION,
    PRESS_SCALE,
};
use std::time::Duration;

#[test]
fn test_press_transform_follows_policy() {
    let full = PressFeedback::new(MotionPolicy::Full, true).on_press();
    assert_eq!(full.scale, PRESS_SCALE);
    assert_eq!(full.duration, PRESS_DURATION);

    let reduced = PressFeedback::new(MotionPolicy::Reduced, true).on_press();
    assert!(reduced.is_identity());
    assert_eq!(reduced.duration, Duration::ZERO);
}

#[test]
fn test_disabled_press_has_no_transform() {
    assert!(PressFeedback::new(MotionPolicy::Full, false)
        .on_press()
        .is_identity());
}

#[test]
fn test_every_resolver_sees_signal_changes() {
    let signal = ReducedMotionSignal::new(false);
    let mut first = signal.resolver();
    let second = signal.resolver();

    assert!(signal.set(true));
    assert!(!signal.set(true));

    assert_eq!(first.take_change(), Some(MotionPolicy::Reduced));
    assert_eq!(first.take_change(), None);
    assert_eq!(second.resolve(), MotionPolicy::Reduced);

    signal.set(false);
    assert_eq!(first.resolve(), MotionPolicy::Full);
}

#[test]
fn test_parse_motion_flag() {
    assert_eq!(parse_motion_flag(" Yes "), Some(true));
    assert_eq!(parse_motion_flag("0"), Some(false));
    assert_eq!(parse_motion_flag("sometimes"), None);
}
