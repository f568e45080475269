//! Per-axis bounds used by rubberbanding.

use crate::vector::Axis;

/// Allowed `[min, max]` range on one axis. Either end may be infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const UNBOUNDED: AxisRange = AxisRange {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the range, infinite when either end is.
    pub fn extent(&self) -> f32 {
        self.max - self.min
    }

    /// Hard clamp. Unlike [`f32::clamp`] this never panics on inverted ranges.
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// A range is usable when no end is NaN and `min <= max`.
    pub fn is_valid(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan() && self.min <= self.max
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Bounds on both axes, `[[min_x, max_x], [min_y, max_y]]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl Bounds {
    pub const UNBOUNDED: Bounds = Bounds {
        x: AxisRange::UNBOUNDED,
        y: AxisRange::UNBOUNDED,
    };

    pub const fn new(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y }
    }

    /// Builds bounds from element-style edges.
    pub fn from_edges(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            x: AxisRange::new(left, right),
            y: AxisRange::new(top, bottom),
        }
    }

    pub fn axis(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_on_inverted_range_does_not_panic() {
        let range = AxisRange::new(10.0, -10.0);
        assert!(!range.is_valid());
        assert_eq!(range.clamp(0.0), 10.0);
    }

    #[test]
    fn unbounded_contains_everything_finite() {
        assert!(AxisRange::UNBOUNDED.contains(1.0e30));
        assert!(AxisRange::UNBOUNDED.extent().is_infinite());
    }

    #[test]
    fn edges_map_to_axes() {
        let bounds = Bounds::from_edges(-1.0, 2.0, -3.0, 4.0);
        assert_eq!(bounds.axis(Axis::X), AxisRange::new(-1.0, 2.0));
        assert_eq!(bounds.axis(Axis::Y), AxisRange::new(-3.0, 4.0));
    }
}
