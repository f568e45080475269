//! Scroll offsets of the element. Debounced.

use gestura_math::Vec2;

use super::coordinates::coordinates_intentionality;
use super::{
    coordinates_values, ElementEvent, GestureContext, Intentional, IntentionalityCheck,
    Recognizer,
};
use crate::config::GestureConfig;
use crate::event::StateValues;
use crate::input::{InputEvent, InputSnapshot, ScrollEvent};
use crate::outcome::{IgnoreReason, Outcome};
use crate::state::{GestureKind, GestureState};

pub(crate) struct ScrollRecognizer;

impl Recognizer for ScrollRecognizer {
    const KIND: GestureKind = GestureKind::Scroll;

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
        &[ElementEvent::Scroll]
    }
}

impl ScrollRecognizer {
    pub(crate) fn on_scroll(
        &self,
        cx: &mut GestureContext<'_>,
        event: &ScrollEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        let previous = cx.state.values;
        self.debounced_tick(
            cx,
            event.scroll,
            previous,
            InputEvent::Scroll(event.clone()),
            snapshot,
        )
    }
}
