//! Pointer entering and leaving the element.

use gestura_math::Vec2;

use super::coordinates::coordinates_intentionality;
use super::{
    coordinates_values, ElementEvent, GestureContext, Intentional, IntentionalityCheck,
    Recognizer,
};
use crate::config::GestureConfig;
use crate::event::StateValues;
use crate::input::{InputEvent, InputSnapshot, PointerEvent};
use crate::outcome::{IgnoreReason, Outcome};
use crate::state::{GestureKind, GestureState};

pub(crate) struct HoverRecognizer;

impl Recognizer for HoverRecognizer {
    const KIND: GestureKind = GestureKind::Hover;

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
        &[ElementEvent::PointerEnter, ElementEvent::PointerLeave]
    }
}

impl HoverRecognizer {
    pub(crate) fn on_pointer_enter(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        if cx.state.engaged {
            return Outcome::Ignored(IgnoreReason::AlreadyActive);
        }
        let position = event.position;
        self.start_session(
            cx,
            position,
            position,
            InputEvent::Pointer(event.clone()),
            snapshot,
        );
        self.update_movement(cx, position);
        self.fire(cx, true)
    }

    pub(crate) fn on_pointer_leave(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.state.engaged {
            return Outcome::Ignored(IgnoreReason::Inactive);
        }
        cx.apply_payload(snapshot);
        self.update_kinematics(cx, event.position, event.time);
        cx.state.event = Some(InputEvent::Pointer(event.clone()));
        cx.state.engaged = false;
        cx.clean();
        log::debug!("hover: pointer left");
        self.fire(cx, true)
    }
}
