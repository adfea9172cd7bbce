//! Assertion helpers for dial robot tests.

use fmdial_ui::{FrequencyDial, ScrollBounds};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a frequency matches to within a tenth of a step.
pub fn assert_frequency_eq(actual: f64, expected: f64, msg: &str) {
    assert!(
        (actual - expected).abs() < 0.01,
        "{}: expected {:.2}, got {:.2}",
        msg,
        expected,
        actual
    );
}

/// Assert that an offset lies inside the scroll bounds.
pub fn assert_within_bounds(offset: f32, bounds: ScrollBounds, msg: &str) {
    assert!(
        bounds.contains(offset),
        "{}: offset {} outside [{}, {}]",
        msg,
        offset,
        bounds.left,
        bounds.right
    );
}

/// Assert that the dial rests exactly on a mark.
pub fn assert_snapped(dial: &FrequencyDial, msg: &str) {
    let Some(bounds) = dial.bounds() else {
        panic!("{}: dial has no bounds yet", msg);
    };
    let unit = dial.scale().pixels_per_mark();
    let steps = (dial.offset() - bounds.left) / unit;
    assert!(
        (steps - steps.round()).abs() < 1e-4,
        "{}: offset {} is {} marks past the left border",
        msg,
        dial.offset(),
        steps
    );
}
