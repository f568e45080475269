//! Wheel ticks accumulated into a position. Debounced.

use gestura_math::Vec2;

use super::coordinates::coordinates_intentionality;
use super::{
    coordinates_values, ElementEvent, GestureContext, Intentional, IntentionalityCheck,
    Recognizer,
};
use crate::config::GestureConfig;
use crate::event::StateValues;
use crate::input::{InputEvent, InputSnapshot, WheelEvent};
use crate::outcome::{IgnoreReason, Outcome};
use crate::state::{GestureKind, GestureState};

pub(crate) struct WheelRecognizer;

impl Recognizer for WheelRecognizer {
    const KIND: GestureKind = GestureKind::Wheel;

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
        &[ElementEvent::Wheel]
    }
}

impl WheelRecognizer {
    /// Values keep accumulating across sessions; a new session measures from
    /// where the last one left off.
    pub(crate) fn on_wheel(
        &self,
        cx: &mut GestureContext<'_>,
        event: &WheelEvent,
        snapshot: InputSnapshot,
    ) -> Outcome {
        if !cx.enabled() {
            return Outcome::Ignored(IgnoreReason::Disabled);
        }
        let previous = cx.state.values;
        let values = previous + event.pixel_delta();
        self.debounced_tick(
            cx,
            values,
            previous,
            InputEvent::Wheel(event.clone()),
            snapshot,
        )
    }
}
