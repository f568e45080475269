//! Per-kind gesture state machines.
//!
//! Every kind implements [`Recognizer`]: it names how raw samples turn into
//! displacement, how intentionality is checked and how the state is mapped
//! for the handler. The session machinery (thresholds, movement, offset,
//! rubberbanding, kinematics, debounced termination, cancellation) is shared
//! and lives in the trait's provided methods.
//!
//! Sessions go idle -> engaged -> idle. `engaged` flips immediately on the
//! start or end trigger; `active` follows on the next firing frame.

pub(crate) mod context;
mod coordinates;
mod drag;
mod hover;
mod move_gesture;
mod pinch;
mod scroll;
mod wheel;

pub(crate) use context::GestureContext;
pub(crate) use drag::DragRecognizer;
pub(crate) use hover::HoverRecognizer;
pub(crate) use move_gesture::MoveRecognizer;
pub(crate) use pinch::PinchRecognizer;
pub(crate) use scroll::ScrollRecognizer;
pub(crate) use wheel::WheelRecognizer;

use gestura_math::{kinematics, rubberband_vec, sign, Axis, Vec2};
use web_time::Instant;

use crate::config::GestureConfig;
use crate::controller::timers::TimerAction;
use crate::event::StateValues;
use crate::input::{InputEvent, InputSnapshot};
use crate::outcome::{IgnoreReason, Outcome};
use crate::state::{GestureKind, GestureState};

/// Element-level event a recognizer listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementEvent {
    PointerDown,
    PointerMove,
    PointerEnter,
    PointerLeave,
    Wheel,
    Scroll,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

/// Per-axis intentionality, `None` until the threshold is crossed.
pub(crate) type Intentional = [Option<f32>; 2];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct IntentionalityCheck {
    pub(crate) intentional: Intentional,
    pub(crate) blocked: bool,
    pub(crate) axis: Option<Axis>,
}

/// Signed threshold once `|displacement|` reaches `threshold`.
pub(crate) fn intentional_displacement(displacement: f32, threshold: f32) -> Option<f32> {
    if displacement.abs() >= threshold {
        Some(sign(displacement) * threshold)
    } else {
        None
    }
}

fn elapsed_ms(from: Option<Instant>, to: Instant) -> f32 {
    from.map(|from| to.saturating_duration_since(from).as_secs_f32() * 1000.0)
        .unwrap_or(0.0)
}

pub(crate) trait Recognizer {
    const KIND: GestureKind;

    /// Raw displacement of `values` within the session.
    fn internal_movement(&self, values: Vec2, state: &GestureState) -> Vec2 {
        values - state.initial
    }

    /// Lets a kind veto or block intentional axes.
    fn check_intentionality(
        &self,
        intentional: Intentional,
        _movement: Vec2,
        state: &GestureState,
        _config: &GestureConfig,
    ) -> IntentionalityCheck {
        IntentionalityCheck {
            intentional,
            blocked: false,
            axis: state.axis,
        }
    }

    fn map_state_values(&self, state: &GestureState) -> StateValues;

    fn bindings(&self) -> &'static [ElementEvent];

    /// Opens a session at `values`, measuring movement from `initial`.
    fn start_session(
        &self,
        cx: &mut GestureContext<'_>,
        values: Vec2,
        initial: Vec2,
        event: InputEvent,
        snapshot: InputSnapshot,
    ) {
        cx.apply_payload(snapshot);
        let state = &mut *cx.state;
        state.begin(values, event.time());
        state.initial = initial;
        state.event = Some(event);
        state.bounds = cx.config.bounds.bounds(state);
        state.initial_movement = cx.config.initial.initial(state);
        state.movement = state.initial_movement;
        log::debug!("{}: session start at {:?}", Self::KIND, values);
    }

    /// Movement algorithm for one sample.
    ///
    /// Axes become intentional once their raw displacement reaches the
    /// threshold and stay so for the session. Movement on an intentional
    /// axis continues from zero at the crossing, so nothing jumps. Movement
    /// and offset are rubberbanded against the session bounds, with a hard
    /// clamp once the session is no longer engaged.
    fn update_movement(&self, cx: &mut GestureContext<'_>, values: Vec2) {
        let config = cx.config;
        let state = &mut *cx.state;
        let raw = self.internal_movement(values, state);
        state.previous = state.values;
        state.values = values;
        state.raw_movement = raw;

        let mut intentional = state.intentional;
        for axis in Axis::ALL {
            let slot = &mut intentional[axis.index()];
            if slot.is_none() {
                *slot = intentional_displacement(raw.get(axis), config.threshold.get(axis));
            }
        }
        let check = self.check_intentionality(intentional, raw, state, config);
        state.axis = check.axis;
        if check.blocked {
            state.blocked = true;
            state.delta = Vec2::ZERO;
            return;
        }
        state.intentional = check.intentional;

        let mut movement = state.initial_movement;
        for axis in Axis::ALL {
            if let Some(threshold) = check.intentional[axis.index()] {
                movement.set(
                    axis,
                    raw.get(axis) - threshold + state.initial_movement.get(axis),
                );
            }
        }
        let factors = if state.engaged {
            config.rubberband
        } else {
            Vec2::ZERO
        };
        let offset = state.last_offset + movement - state.initial_movement;
        let movement = rubberband_vec(movement, &state.bounds, factors);
        state.offset = rubberband_vec(offset, &state.bounds, factors);
        state.delta = movement - state.movement;
        state.movement = movement;
    }

    /// Movement plus velocity, distance and direction for a sample at `time`.
    fn update_kinematics(&self, cx: &mut GestureContext<'_>, values: Vec2, time: Instant) {
        self.update_movement(cx, values);
        let state = &mut *cx.state;
        if !state.blocked {
            let dt = elapsed_ms(state.time_stamp, time);
            let k = kinematics(
                state.delta,
                state.movement - state.initial_movement,
                dt,
                state.direction,
            );
            state.velocities = k.velocities;
            state.velocity = k.velocity;
            state.distance = k.distance;
            state.direction = k.direction;
        }
        state.stamp(time);
    }

    fn fire(&self, cx: &mut GestureContext<'_>, force: bool) -> Outcome {
        let values = self.map_state_values(cx.state);
        cx.flush(values, force)
    }

    /// One tick of a debounced gesture. The first tick of a quiet period
    /// starts a session measured from `initial`; every tick pushes the end
    /// timer back.
    fn debounced_tick(
        &self,
        cx: &mut GestureContext<'_>,
        values: Vec2,
        initial: Vec2,
        event: InputEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        let time = event.time();
        let debounce = cx.debounce;
        cx.set_timer(TimerAction::DebounceEnd, debounce, time);
        if !cx.state.engaged {
            self.start_session(cx, values, initial, event, snapshot);
            self.update_movement(cx, values);
        } else {
            cx.apply_payload(snapshot);
            self.update_kinematics(cx, values, time);
            cx.state.event = Some(event);
        }
        self.fire(cx, false)
    }

    /// Debounce timer elapsed: final flush at zero velocity.
    fn end_debounced(&self, cx: &mut GestureContext<'_>) -> Outcome {
        cx.clean();
        if !cx.state.engaged {
            return Outcome::Ignored(IgnoreReason::Inactive);
        }
        cx.state.engaged = false;
        let values = cx.state.values;
        self.update_movement(cx, values);
        cx.state.velocities = Vec2::ZERO;
        cx.state.velocity = 0.0;
        log::debug!("{}: session end after quiet period", Self::KIND);
        self.fire(cx, false)
    }
}

/// Cancels the running or pending session of `cx`'s kind.
///
/// The session is marked canceled and released at once; the handler hears
/// about it in a single flush on the next frame. Repeated calls before that
/// flush do nothing.
pub(crate) fn cancel_session(cx: &mut GestureContext<'_>) -> Outcome {
    let kind = cx.kind;
    if cx.state.canceled {
        return Outcome::Ignored(IgnoreReason::Canceled);
    }
    if cx.state.pending.take().is_some() {
        log::debug!("{kind}: pending start canceled");
        cx.state.pointer_id = None;
        cx.shared.release();
        cx.clean();
        return Outcome::Updated;
    }
    if !cx.state.engaged {
        return Outcome::Ignored(IgnoreReason::Inactive);
    }
    log::debug!("{kind}: session canceled");
    cx.state.canceled = true;
    cx.state.engaged = false;
    cx.shared.release();
    cx.clean();
    cx.request_frame();
    Outcome::Updated
}

/// Handler values for the x/y kinds.
pub(crate) fn coordinates_values(state: &GestureState) -> StateValues {
    StateValues::Coordinates {
        xy: state.values,
        vxvy: state.velocities,
    }
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod tests;
