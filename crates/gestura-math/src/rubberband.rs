//! Rubberband compression of out-of-bounds values.
//!
//! A value past a bound is pulled back toward it with a diminishing-return
//! curve: the further past the bound, the less each extra pixel of input
//! moves the output. The curve is `bound ± d * e * c / (e + c * d)` where `d`
//! is the overshoot, `e` the extent of the allowed range and `c` the factor.
//!
//! A factor of `0` degenerates to a hard clamp. An infinite extent uses the
//! limit of the curve, `d * c`.

use crate::bounds::{AxisRange, Bounds};
use crate::vector::{Axis, Vec2};

/// Factor used when rubberbanding is switched on without an explicit value.
pub const DEFAULT_RUBBERBAND: f32 = 0.15;

/// Compressed overshoot for a value `overshoot` past the bound of a range of
/// width `extent`.
pub fn rubberband(overshoot: f32, extent: f32, factor: f32) -> f32 {
    if extent.is_infinite() {
        return overshoot * factor;
    }
    let denominator = extent + factor * overshoot;
    if denominator <= 0.0 {
        return 0.0;
    }
    overshoot * extent * factor / denominator
}

/// Passes `value` through when inside `range`, compresses it otherwise.
pub fn rubberband_if_out_of_bounds(value: f32, range: AxisRange, factor: f32) -> f32 {
    if factor == 0.0 {
        return range.clamp(value);
    }
    if value < range.min {
        range.min - rubberband(range.min - value, range.extent(), factor)
    } else if value > range.max {
        range.max + rubberband(value - range.max, range.extent(), factor)
    } else {
        value
    }
}

/// Applies [`rubberband_if_out_of_bounds`] on both axes with per-axis factors.
pub fn rubberband_vec(position: Vec2, bounds: &Bounds, factors: Vec2) -> Vec2 {
    let mut out = position;
    for axis in Axis::ALL {
        out.set(
            axis,
            rubberband_if_out_of_bounds(position.get(axis), bounds.axis(axis), factors.get(axis)),
        );
    }
    out
}
