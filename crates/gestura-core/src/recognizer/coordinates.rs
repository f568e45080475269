//! Axis restriction and direction lock for the x/y kinds.

use gestura_math::Vec2;

use super::{Intentional, IntentionalityCheck};
use crate::config::GestureConfig;
use crate::state::GestureState;

/// Decides the session's dominant axis once something is intentional.
///
/// Under `axis` or `lock_direction` only the dominant axis stays
/// intentional. A session whose dominant axis differs from a configured
/// `axis` is blocked.
pub(crate) fn coordinates_intentionality(
    mut intentional: Intentional,
    movement: Vec2,
    state: &GestureState,
    config: &GestureConfig,
) -> IntentionalityCheck {
    if intentional.iter().all(Option::is_none) {
        return IntentionalityCheck {
            intentional,
            blocked: false,
            axis: state.axis,
        };
    }
    let axis = state.axis.or_else(|| movement.dominant_axis());
    if config.axis.is_none() && !config.lock_direction {
        return IntentionalityCheck {
            intentional,
            blocked: false,
            axis,
        };
    }
    let Some(axis) = axis else {
        return IntentionalityCheck {
            intentional: [None, None],
            blocked: false,
            axis: None,
        };
    };
    if config.axis.is_some_and(|restricted| restricted != axis) {
        return IntentionalityCheck {
            intentional,
            blocked: true,
            axis: Some(axis),
        };
    }
    intentional[axis.other().index()] = None;
    IntentionalityCheck {
        intentional,
        blocked: false,
        axis: Some(axis),
    }
}
