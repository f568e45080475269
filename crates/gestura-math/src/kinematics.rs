//! Velocity, distance and direction from positional deltas.

use crate::vector::Vec2;

/// Derived quantities for one sample. Velocities are in units per millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Kinematics {
    pub velocities: Vec2,
    pub velocity: f32,
    pub distance: f32,
    pub direction: Vec2,
}

/// Computes kinematics for a sample.
///
/// * `delta` - movement since the previous sample
/// * `travel` - movement since the start of the session
/// * `dt_ms` - time since the previous sample; velocities are zero when it is
///   not strictly positive
/// * `previous_direction` - kept when `delta` has zero length
pub fn kinematics(delta: Vec2, travel: Vec2, dt_ms: f32, previous_direction: Vec2) -> Kinematics {
    let delta_length = delta.length();
    let inverse_dt = if dt_ms > 0.0 && dt_ms.is_finite() {
        1.0 / dt_ms
    } else {
        0.0
    };
    let direction = if delta_length > 0.0 {
        delta / delta_length
    } else {
        previous_direction
    };
    Kinematics {
        velocities: delta * inverse_dt,
        velocity: delta_length * inverse_dt,
        distance: travel.length(),
        direction,
    }
}

/// Distance and angle between two points, as used by two-finger gestures.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DistanceAngle {
    pub distance: f32,
    /// Angle in degrees in `(-180, 180]`.
    pub angle: f32,
    /// Midpoint between the two points.
    pub origin: Vec2,
}

impl DistanceAngle {
    /// `[distance, angle]` as a vector, the value space of pinch gestures.
    pub fn values(&self) -> Vec2 {
        Vec2::new(self.distance, self.angle)
    }
}

pub fn distance_angle(a: Vec2, b: Vec2) -> DistanceAngle {
    let d = b - a;
    DistanceAngle {
        distance: d.length(),
        angle: -d.x.atan2(d.y).to_degrees(),
        origin: (a + b) / 2.0,
    }
}
