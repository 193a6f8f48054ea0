//! Motion policy and press feedback.
//!
//! The platform's reduced-motion preference is pushed through a
//! [`ReducedMotionSignal`]; controls read the derived [`MotionPolicy`] from a
//! [`MotionPolicyResolver`] and ask [`PressFeedback`] which transform to apply.

pub mod policy;
pub mod press;

pub use policy::{
    detect_reduced_motion, parse_motion_flag, MotionPolicy, MotionPolicyResolver,
    ReducedMotionSignal, REDUCE_MOTION_ENV,
};
pub use press::{PressFeedback, PressTransform, PRESS_DURATION, PRESS_SCALE};
