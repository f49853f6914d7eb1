//! Gesture and transition validation.

use crate::schema::SwipeNavConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_gesture(errors: &mut Vec<String>, config: &SwipeNavConfig) {
    validate_range_f64(
        errors,
        "gesture.min_distance_px",
        config.gesture.min_distance_px,
        0.0,
        500.0,
    );
    validate_range_f64(
        errors,
        "gesture.axis_ratio",
        config.gesture.axis_ratio,
        1.0,
        10.0,
    );
}

pub(crate) fn validate_transition(errors: &mut Vec<String>, config: &SwipeNavConfig) {
    validate_range(
        errors,
        "transition.duration_ms",
        config.transition.duration_ms,
        1,
        10_000,
    );
}
