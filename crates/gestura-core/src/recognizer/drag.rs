//! Pointer drag with optional start delay, tap detection and swipe detection.

use gestura_math::{sign, Axis, Vec2};
use web_time::Instant;

use super::coordinates::coordinates_intentionality;
use super::{
    coordinates_values, ElementEvent, GestureContext, Intentional, IntentionalityCheck,
    Recognizer,
};
use crate::config::GestureConfig;
use crate::controller::listeners::WindowEventType;
use crate::controller::timers::TimerAction;
use crate::event::StateValues;
use crate::gesture_constants::{SWIPE_MAX_ELAPSED, TAP_DISTANCE_THRESHOLD};
use crate::input::{InputEvent, InputSnapshot, PointerEvent};
use crate::outcome::{IgnoreReason, Outcome};
use crate::state::{GestureKind, GestureState};

pub(crate) struct DragRecognizer;

impl Recognizer for DragRecognizer {
    const KIND: GestureKind = GestureKind::Drag;

    fn check_intentionality(
        &self,
        intentional: Intentional,
        movement: Vec2,
        state: &GestureState,
        config: &GestureConfig,
    ) -> IntentionalityCheck {
        coordinates_intentionality(intentional, movement, state, config)
    }

    fn map_state_values(&self, state: &GestureState) -> StateValues {
        coordinates_values(state)
    }

    fn bindings(&self) -> &'static [ElementEvent] {
        &[ElementEvent::PointerDown]
    }
}

impl DragRecognizer {
    /// Start trigger. Window listeners go up here so the drag keeps tracking
    /// once the pointer leaves the element, including during a start delay.
    pub(crate) fn on_pointer_down(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        if cx.state.engaged || cx.state.pending.is_some() {
            return Outcome::Ignored(IgnoreReason::AlreadyActive);
        }
        cx.attach_window(&WindowEventType::POINTER);

        let delay = cx.config.delay;
        if !delay.is_zero() {
            log::debug!("drag: start delayed by {:?}", delay);
            cx.apply_payload(snapshot);
            cx.state.pending = Some(event.clone());
            cx.state.pointer_id = Some(event.id);
            cx.set_timer(TimerAction::DelayedStart, delay, event.time);
            return Outcome::Updated;
        }
        self.start(cx, event.clone(), snapshot)
    }

    /// The start delay elapsed with the pointer still down.
    pub(crate) fn on_delay_elapsed(&self, cx: &mut GestureContext<'_>, now: Instant) -> Outcome {
        let Some(mut event) = cx.state.pending.take() else {
            return Outcome::Ignored(IgnoreReason::Inactive);
        };
        event.time = now;
        let snapshot = cx.shared.snapshot();
        self.start(cx, event, snapshot)
    }

    fn start(
        &self,
        cx: &mut GestureContext<'_>,
        event: PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        let position = event.position;
        let id = event.id;
        self.start_session(cx, position, position, InputEvent::Pointer(event), snapshot);
        cx.state.pointer_id = Some(id);
        cx.state.tap = true;
        self.update_movement(cx, position);
        self.fire(cx, false)
    }

    pub(crate) fn on_pointer_move(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if cx.state.pending.is_some() {
            return Outcome::Ignored(IgnoreReason::DelayPending);
        }
        if let Some(reason) = Self::reject(cx.state, event) {
            return Outcome::Ignored(reason);
        }
        if !snapshot.down {
            // Released somewhere the up event never reached us.
            return self.end(cx, event, snapshot);
        }
        cx.apply_payload(snapshot);
        self.update_kinematics(cx, event.position, event.time);
        let state = &mut *cx.state;
        state.event = Some(InputEvent::Pointer(event.clone()));
        if state.tap && state.raw_movement.length() > TAP_DISTANCE_THRESHOLD {
            state.tap = false;
        }
        self.fire(cx, false)
    }

    /// End trigger for pointer up and pointer cancel. Releasing during a
    /// start delay drops the pending start.
    pub(crate) fn on_pointer_up(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if let Some(pending) = &cx.state.pending {
            if pending.id != event.id {
                return Outcome::Ignored(IgnoreReason::StalePointer);
            }
            log::debug!("drag: released before start delay elapsed");
            cx.state.pending = None;
            cx.state.pointer_id = None;
            cx.apply_payload(snapshot);
            cx.clean();
            return Outcome::Updated;
        }
        if let Some(reason) = Self::reject(cx.state, event) {
            return Outcome::Ignored(reason);
        }
        self.end(cx, event, snapshot)
    }

    fn reject(state: &GestureState, event: &PointerEvent) -> Option<IgnoreReason> {
        if state.canceled {
            Some(IgnoreReason::Canceled)
        } else if !state.engaged {
            Some(IgnoreReason::Inactive)
        } else if state.pointer_id != Some(event.id) {
            Some(IgnoreReason::StalePointer)
        } else {
            None
        }
    }

    fn end(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        cx.state.engaged = false;
        cx.apply_payload(snapshot);
        cx.shared.release();
        cx.clean();

        let velocities = cx.state.velocities;
        let movement = cx.state.movement;
        let intentional = cx.state.intentional;
        let values = cx.state.values;
        self.update_movement(cx, values);

        let config = cx.config;
        let state = &mut *cx.state;
        state.stamp(event.time);
        state.event = Some(InputEvent::Pointer(event.clone()));
        state.swipe = [0, 0];
        if state.elapsed_time < SWIPE_MAX_ELAPSED {
            for axis in Axis::ALL {
                let i = axis.index();
                let v = velocities.get(axis);
                if intentional[i].is_some()
                    && v.abs() > config.swipe_velocity.get(axis)
                    && movement.get(axis).abs() > config.swipe_distance.get(axis)
                {
                    state.swipe[i] = sign(v) as i8;
                }
            }
        }
        log::debug!(
            "drag: session end (tap: {}, swipe: {:?})",
            state.tap,
            state.swipe
        );

        if config.filter_taps && state.tap {
            state.first = false;
            state.last = false;
            state.active = false;
            cx.shared.set_active(GestureKind::Drag, false);
            return Outcome::Updated;
        }
        self.fire(cx, true)
    }
}
