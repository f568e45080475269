//! Assertion helpers for gesture tests.

use gestura_math::Vec2;

/// Assert that a value is within an expected range.
///
/// Velocities and rubberbanded values come out of float math; compare them
/// with a tolerance.
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

/// Assert that a vector is approximately equal to another, per axis.
pub fn assert_vec_approx_eq(actual: Vec2, expected: Vec2, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that `value` lies strictly between `low` and `high`.
pub fn assert_strictly_between(value: f32, low: f32, high: f32, msg: &str) {
    assert!(
        value > low && value < high,
        "{}: expected {} to lie strictly between {} and {}",
        msg,
        value,
        low,
        high
    );
}
