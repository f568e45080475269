//! Pointer movement over the element, with or without buttons. Debounced.

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

pub(crate) struct MoveRecognizer;

impl Recognizer for MoveRecognizer {
    const KIND: GestureKind = GestureKind::Move;

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
        &[ElementEvent::PointerMove]
    }
}

impl MoveRecognizer {
    pub(crate) fn on_pointer_move(
        &self,
        cx: &mut GestureContext<'_>,
        event: &PointerEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        self.debounced_tick(
            cx,
            event.position,
            event.position,
            InputEvent::Pointer(event.clone()),
            snapshot,
        )
    }
}
