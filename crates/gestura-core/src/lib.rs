//! Gesture recognition engine.
//!
//! Turns raw pointer, wheel, scroll and touch events into high level gesture
//! states (drag, move, hover, wheel, scroll, pinch) with thresholds, bounds,
//! rubberbanding, kinematics, debounced termination and cancellation. The
//! engine is single threaded and host driven: it never spawns timers or
//! registers listeners itself, it asks the host through [`Controller`].

pub mod collections;
pub mod config;
pub mod controller;
pub mod event;
pub mod gesture_constants;
pub mod input;
pub mod outcome;
mod recognizer;
pub mod state;

pub use config::{
    BoundsOption, ControllerConfig, CoordinatesOptions, DelayOption, DragOptions, EdgeBounds,
    EventOptions, GestureConfig, GestureOptions, InitialOption, PinchOptions, RubberbandOption,
    VectorOption,
};
pub use controller::{
    Controller, EventBinding, GestureHandler, Timer, TimerAction, TimerId, WindowBinding,
    WindowEventType,
};
pub use event::{GestureEvent, StateValues};
pub use input::*;
pub use outcome::{DispatchReport, IgnoreReason, Outcome};
pub use recognizer::ElementEvent;
pub use state::{CancelToken, GestureKind, GestureMap, GestureState, Memo, SharedState};

pub use gestura_math::{Axis, AxisRange, Bounds, Vec2};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::controller::*;
    pub use crate::event::*;
    pub use crate::input::*;
    pub use crate::outcome::*;
    pub use crate::recognizer::ElementEvent;
    pub use crate::state::*;
    pub use gestura_math::{Axis, AxisRange, Bounds, Vec2};
}
