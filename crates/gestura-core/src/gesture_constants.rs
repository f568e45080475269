//! Shared gesture constants.
//!
//! Distances are in logical pixels, velocities in logical pixels per
//! millisecond. For very high-density touch screens, consider scaling the
//! distance values by the device's DPI factor.

use web_time::Duration;

/// Travel distance under which a drag still counts as a tap.
///
/// The tap flag is cleared the first time the true (un-thresholded) distance
/// from the press position goes past this value, and stays cleared for the
/// rest of the session.
pub const TAP_DISTANCE_THRESHOLD: f32 = 3.0;

/// Drag threshold applied when tap filtering is on and no threshold is given.
pub const FILTER_TAPS_THRESHOLD: f32 = TAP_DISTANCE_THRESHOLD;

/// Threshold applied to direction-locked or single-axis gestures when no
/// threshold is given, so the dominant axis can be decided before movement
/// is emitted.
pub const AXIS_LOCK_THRESHOLD: f32 = 1.0;

/// Sessions lasting this long or longer never report a swipe.
pub const SWIPE_MAX_ELAPSED: Duration = Duration::from_millis(220);

/// Minimum release velocity per axis for a swipe.
pub const DEFAULT_SWIPE_VELOCITY: f32 = 0.5;

/// Minimum movement per axis for a swipe.
pub const DEFAULT_SWIPE_DISTANCE: f32 = 60.0;

/// Quiet period after which a wheel, scroll or move session ends.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(140);

/// Start delay used when the drag delay option is `true`.
pub const DEFAULT_DRAG_DELAY: Duration = Duration::from_millis(180);

/// Pixels per line for wheel events reported in line mode.
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;

/// Pixels per page for wheel events reported in page mode.
pub const WHEEL_PAGE_HEIGHT: f32 = 800.0;

/// Angle jump between two pinch samples treated as wrapping around ±180°.
pub const ANGLE_WRAP_THRESHOLD: f32 = 270.0;
