//! The merged view a handler receives.

use std::ops::Deref;

use gestura_math::Vec2;

use crate::input::PointerButtons;
use crate::state::{GestureKind, GestureState, Memo, SharedState};

/// Kind-specific names for the raw values and velocities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateValues {
    /// Drag, move, hover, wheel and scroll.
    Coordinates { xy: Vec2, vxvy: Vec2 },
    /// Pinch: `[distance, angle]` and their velocities.
    DistanceAngle { da: Vec2, vdva: Vec2 },
}

impl StateValues {
    pub fn values(&self) -> Vec2 {
        match self {
            StateValues::Coordinates { xy, .. } => *xy,
            StateValues::DistanceAngle { da, .. } => *da,
        }
    }

    pub fn velocities(&self) -> Vec2 {
        match self {
            StateValues::Coordinates { vxvy, .. } => *vxvy,
            StateValues::DistanceAngle { vdva, .. } => *vdva,
        }
    }
}

/// Shared state, gesture state and mapped values of one firing frame.
///
/// Dereferences to [`GestureState`], so `event.movement` and friends read the
/// gesture's own fields directly.
pub struct GestureEvent<'a> {
    pub kind: GestureKind,
    pub shared: &'a SharedState,
    pub state: &'a GestureState,
    pub values: StateValues,
    pub args: Option<&'a Memo>,
}

impl GestureEvent<'_> {
    pub fn down(&self) -> bool {
        self.shared.down
    }

    pub fn buttons(&self) -> PointerButtons {
        self.shared.buttons
    }

    pub fn touches(&self) -> u32 {
        self.shared.touches
    }

    /// Requests cancellation of this gesture's session. Takes effect once the
    /// current dispatch returns.
    pub fn cancel(&self) {
        self.state.cancel.cancel();
    }
}

impl Deref for GestureEvent<'_> {
    type Target = GestureState;

    fn deref(&self) -> &GestureState {
        self.state
    }
}
