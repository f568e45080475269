//! Two-finger pinch and rotate, plus ctrl+wheel zoom from trackpads.
//!
//! Values are `[distance, angle]`. The angle is unwrapped across the ±180°
//! seam by counting turns, so a full rotation reads as 360° of movement
//! instead of a jump back.

use gestura_math::{distance_angle, DistanceAngle, Vec2};

use super::{ElementEvent, GestureContext, Recognizer};
use crate::event::StateValues;
use crate::gesture_constants::ANGLE_WRAP_THRESHOLD;
use crate::input::{InputEvent, InputSnapshot, PointerId, TouchEvent, WheelEvent};
use crate::outcome::{IgnoreReason, Outcome};
use crate::state::{GestureKind, GestureState};

pub(crate) struct PinchRecognizer;

/// Turn count after moving from `previous` to `angle`, both in degrees.
pub(crate) fn next_turns(previous: f32, angle: f32, turns: i32) -> i32 {
    let delta = angle - previous;
    if delta.abs() > ANGLE_WRAP_THRESHOLD {
        turns + delta.signum() as i32
    } else {
        turns
    }
}

impl Recognizer for PinchRecognizer {
    const KIND: GestureKind = GestureKind::Pinch;

    fn internal_movement(&self, values: Vec2, state: &GestureState) -> Vec2 {
        let turns = next_turns(state.values.y, values.y, state.turns);
        Vec2::new(values.x, values.y - 360.0 * turns as f32) - state.initial
    }

    fn map_state_values(&self, state: &GestureState) -> StateValues {
        StateValues::DistanceAngle {
            da: state.values,
            vdva: state.velocities,
        }
    }

    fn bindings(&self) -> &'static [ElementEvent] {
        &[
            ElementEvent::TouchStart,
            ElementEvent::TouchMove,
            ElementEvent::TouchEnd,
            ElementEvent::TouchCancel,
            ElementEvent::Wheel,
        ]
    }
}

impl PinchRecognizer {
    pub(crate) fn on_touch_start(
        &self,
        cx: &mut GestureContext<'_>,
        event: &TouchEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        if cx.state.engaged {
            return Outcome::Ignored(IgnoreReason::AlreadyActive);
        }
        let [a, b] = match event.touches.as_slice() {
            [a, b, ..] => [*a, *b],
            _ => return Outcome::Ignored(IgnoreReason::NotEnoughTouches),
        };
        let da = distance_angle(a.position, b.position);
        let values = da.values();
        self.start_session(
            cx,
            values,
            values,
            InputEvent::Touch(event.clone()),
            snapshot,
        );
        cx.state.touch_ids = Some([a.id, b.id]);
        cx.state.origin = da.origin;
        self.update_movement(cx, values);
        self.fire(cx, false)
    }

    pub(crate) fn on_touch_move(
        &self,
        cx: &mut GestureContext<'_>,
        event: &TouchEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if cx.state.canceled {
            return Outcome::Ignored(IgnoreReason::Canceled);
        }
        if !cx.state.engaged {
            return Outcome::Ignored(IgnoreReason::Inactive);
        }
        let Some(ids) = cx.state.touch_ids else {
            return Outcome::Ignored(IgnoreReason::NotApplicable);
        };
        let Some(da) = tracked_distance_angle(event, ids) else {
            return Outcome::Ignored(IgnoreReason::StalePointer);
        };
        let values = da.values();
        let turns = next_turns(cx.state.values.y, values.y, cx.state.turns);
        cx.apply_payload(snapshot);
        self.update_kinematics(cx, values, event.time);
        let state = &mut *cx.state;
        state.turns = turns;
        state.origin = da.origin;
        state.event = Some(InputEvent::Touch(event.clone()));
        self.fire(cx, false)
    }

    /// End trigger for touch end and touch cancel. Only the release of one of
    /// the two tracked contacts ends the session.
    pub(crate) fn on_touch_end(
        &self,
        cx: &mut GestureContext<'_>,
        event: &TouchEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if cx.state.canceled {
            return Outcome::Ignored(IgnoreReason::Canceled);
        }
        if !cx.state.engaged {
            return Outcome::Ignored(IgnoreReason::Inactive);
        }
        let Some(ids) = cx.state.touch_ids else {
            return Outcome::Ignored(IgnoreReason::NotApplicable);
        };
        if !event.changed.iter().any(|id| ids.contains(id)) {
            return Outcome::Ignored(IgnoreReason::NotApplicable);
        }
        cx.state.engaged = false;
        cx.apply_payload(snapshot);
        cx.clean();
        let values = cx.state.values;
        self.update_movement(cx, values);
        let state = &mut *cx.state;
        state.touch_ids = None;
        state.stamp(event.time);
        state.event = Some(InputEvent::Touch(event.clone()));
        log::debug!("pinch: contact lifted, session end");
        self.fire(cx, false)
    }

    /// Trackpad pinch, reported as a wheel event with ctrl held. Scrolling
    /// down shrinks the distance; the angle stays put.
    pub(crate) fn on_wheel(
        &self,
        cx: &mut GestureContext<'_>,
        event: &WheelEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        if cx.state.touch_ids.is_some() {
            return Outcome::Ignored(IgnoreReason::AlreadyActive);
        }
        let previous = cx.state.values;
        let values = Vec2::new(previous.x - event.pixel_delta().y, previous.y);
        let outcome = self.debounced_tick(
            cx,
            values,
            previous,
            InputEvent::Wheel(event.clone()),
            snapshot,
        );
        cx.state.origin = event.position;
        outcome
    }
}

fn tracked_distance_angle(event: &TouchEvent, ids: [PointerId; 2]) -> Option<DistanceAngle> {
    let a = event.touch(ids[0])?;
    let b = event.touch(ids[1])?;
    Some(distance_angle(a.position, b.position))
}
