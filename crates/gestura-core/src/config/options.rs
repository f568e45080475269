//! User-facing, partial gesture options.
//!
//! Every field is optional or has a permissive default. Nothing here is
//! validated; [`ControllerConfig::resolve`](super::ControllerConfig::resolve)
//! turns these into canonical values and silently replaces anything unusable.

use std::fmt;
use std::rc::Rc;

use gestura_math::{Axis, Bounds, Vec2};
use web_time::Duration;

use crate::state::GestureState;

/// Value computed from the gesture state at session start.
pub type StateFn<T> = Rc<dyn Fn(&GestureState) -> T>;

/// A value given for both axes at once or per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VectorOption {
    Uniform(f32),
    PerAxis(Vec2),
}

impl VectorOption {
    pub fn to_vec2(self) -> Vec2 {
        match self {
            VectorOption::Uniform(value) => Vec2::splat(value),
            VectorOption::PerAxis(v) => v,
        }
    }
}

impl From<f32> for VectorOption {
    fn from(value: f32) -> Self {
        VectorOption::Uniform(value)
    }
}

impl From<Vec2> for VectorOption {
    fn from(value: Vec2) -> Self {
        VectorOption::PerAxis(value)
    }
}

impl From<(f32, f32)> for VectorOption {
    fn from(value: (f32, f32)) -> Self {
        VectorOption::PerAxis(value.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RubberbandOption {
    /// `true` uses the default factor, `false` clamps.
    Enabled(bool),
    Factor(f32),
    PerAxis(Vec2),
}

impl From<bool> for RubberbandOption {
    fn from(value: bool) -> Self {
        RubberbandOption::Enabled(value)
    }
}

impl From<f32> for RubberbandOption {
    fn from(value: f32) -> Self {
        RubberbandOption::Factor(value)
    }
}

impl From<Vec2> for RubberbandOption {
    fn from(value: Vec2) -> Self {
        RubberbandOption::PerAxis(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DelayOption {
    /// `true` uses the default drag delay, `false` starts immediately.
    Enabled(bool),
    After(Duration),
    Millis(f32),
}

impl From<bool> for DelayOption {
    fn from(value: bool) -> Self {
        DelayOption::Enabled(value)
    }
}

impl From<Duration> for DelayOption {
    fn from(value: Duration) -> Self {
        DelayOption::After(value)
    }
}

impl From<f32> for DelayOption {
    fn from(value: f32) -> Self {
        DelayOption::Millis(value)
    }
}

/// Element-style bounds. Missing edges are infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl EdgeBounds {
    pub fn left(mut self, left: f32) -> Self {
        self.left = left;
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = right;
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = bottom;
        self
    }

    pub fn to_bounds(self) -> Bounds {
        Bounds::from_edges(self.left, self.right, self.top, self.bottom)
    }
}

impl Default for EdgeBounds {
    fn default() -> Self {
        Self {
            left: f32::NEG_INFINITY,
            right: f32::INFINITY,
            top: f32::NEG_INFINITY,
            bottom: f32::INFINITY,
        }
    }
}

#[derive(Clone)]
pub enum BoundsOption {
    Edges(EdgeBounds),
    Dynamic(StateFn<Bounds>),
}

impl From<EdgeBounds> for BoundsOption {
    fn from(value: EdgeBounds) -> Self {
        BoundsOption::Edges(value)
    }
}

impl From<Bounds> for BoundsOption {
    fn from(value: Bounds) -> Self {
        BoundsOption::Edges(EdgeBounds {
            left: value.x.min,
            right: value.x.max,
            top: value.y.min,
            bottom: value.y.max,
        })
    }
}

impl fmt::Debug for BoundsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsOption::Edges(edges) => f.debug_tuple("Edges").field(edges).finish(),
            BoundsOption::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[derive(Clone)]
pub enum InitialOption {
    Fixed(Vec2),
    Dynamic(StateFn<Vec2>),
}

impl From<Vec2> for InitialOption {
    fn from(value: Vec2) -> Self {
        InitialOption::Fixed(value)
    }
}

impl fmt::Debug for InitialOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialOption::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            InitialOption::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Listener options handed to the host with every window attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            passive: true,
            capture: false,
        }
    }
}

/// Options for gestures working in x/y coordinates: move, hover, wheel and
/// scroll. Drag wraps these in [`DragOptions`].
#[derive(Clone, Debug, Default)]
pub struct CoordinatesOptions {
    pub enabled: Option<bool>,
    pub threshold: Option<VectorOption>,
    pub rubberband: Option<RubberbandOption>,
    pub bounds: Option<BoundsOption>,
    pub initial: Option<InitialOption>,
    /// Only emit movement on this axis; sessions starting on the other axis
    /// are blocked.
    pub axis: Option<Axis>,
    /// Keep only the dominant axis of each session.
    pub lock_direction: bool,
}

impl CoordinatesOptions {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn threshold(mut self, threshold: impl Into<VectorOption>) -> Self {
        self.threshold = Some(threshold.into());
        self
    }

    pub fn rubberband(mut self, rubberband: impl Into<RubberbandOption>) -> Self {
        self.rubberband = Some(rubberband.into());
        self
    }

    pub fn bounds(mut self, bounds: impl Into<BoundsOption>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    pub fn bounds_fn(mut self, f: impl Fn(&GestureState) -> Bounds + 'static) -> Self {
        self.bounds = Some(BoundsOption::Dynamic(Rc::new(f)));
        self
    }

    pub fn initial(mut self, initial: impl Into<InitialOption>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    pub fn initial_fn(mut self, f: impl Fn(&GestureState) -> Vec2 + 'static) -> Self {
        self.initial = Some(InitialOption::Dynamic(Rc::new(f)));
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn lock_direction(mut self, lock_direction: bool) -> Self {
        self.lock_direction = lock_direction;
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct DragOptions {
    pub coordinates: CoordinatesOptions,
    /// Sessions that end as a tap never reach the handler.
    pub filter_taps: bool,
    pub delay: Option<DelayOption>,
    pub swipe_velocity: Option<VectorOption>,
    pub swipe_distance: Option<VectorOption>,
}

impl DragOptions {
    pub fn with_coordinates(
        mut self,
        f: impl FnOnce(CoordinatesOptions) -> CoordinatesOptions,
    ) -> Self {
        self.coordinates = f(self.coordinates);
        self
    }

    pub fn enabled(self, enabled: bool) -> Self {
        self.with_coordinates(|c| c.enabled(enabled))
    }

    pub fn threshold(self, threshold: impl Into<VectorOption>) -> Self {
        let threshold = threshold.into();
        self.with_coordinates(|c| c.threshold(threshold))
    }

    pub fn rubberband(self, rubberband: impl Into<RubberbandOption>) -> Self {
        let rubberband = rubberband.into();
        self.with_coordinates(|c| c.rubberband(rubberband))
    }

    pub fn bounds(self, bounds: impl Into<BoundsOption>) -> Self {
        let bounds = bounds.into();
        self.with_coordinates(|c| c.bounds(bounds))
    }

    pub fn initial(self, initial: impl Into<InitialOption>) -> Self {
        let initial = initial.into();
        self.with_coordinates(|c| c.initial(initial))
    }

    pub fn axis(self, axis: Axis) -> Self {
        self.with_coordinates(|c| c.axis(axis))
    }

    pub fn lock_direction(self, lock_direction: bool) -> Self {
        self.with_coordinates(|c| c.lock_direction(lock_direction))
    }

    pub fn filter_taps(mut self, filter_taps: bool) -> Self {
        self.filter_taps = filter_taps;
        self
    }

    pub fn delay(mut self, delay: impl Into<DelayOption>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn swipe_velocity(mut self, velocity: impl Into<VectorOption>) -> Self {
        self.swipe_velocity = Some(velocity.into());
        self
    }

    pub fn swipe_distance(mut self, distance: impl Into<VectorOption>) -> Self {
        self.swipe_distance = Some(distance.into());
        self
    }
}

/// Options for pinch. Values are `[distance, angle]`, so bounds are given as
/// distance and angle ranges.
#[derive(Clone, Debug, Default)]
pub struct PinchOptions {
    pub enabled: Option<bool>,
    pub threshold: Option<VectorOption>,
    pub rubberband: Option<RubberbandOption>,
    pub bounds: Option<BoundsOption>,
    pub initial: Option<InitialOption>,
}

impl PinchOptions {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn threshold(mut self, threshold: impl Into<VectorOption>) -> Self {
        self.threshold = Some(threshold.into());
        self
    }

    pub fn rubberband(mut self, rubberband: impl Into<RubberbandOption>) -> Self {
        self.rubberband = Some(rubberband.into());
        self
    }

    pub fn initial(mut self, initial: impl Into<InitialOption>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    pub fn distance_bounds(mut self, min: f32, max: f32) -> Self {
        let edges = self.edges().left(min).right(max);
        self.bounds = Some(BoundsOption::Edges(edges));
        self
    }

    pub fn angle_bounds(mut self, min: f32, max: f32) -> Self {
        let edges = self.edges().top(min).bottom(max);
        self.bounds = Some(BoundsOption::Edges(edges));
        self
    }

    fn edges(&self) -> EdgeBounds {
        match &self.bounds {
            Some(BoundsOption::Edges(edges)) => *edges,
            _ => EdgeBounds::default(),
        }
    }
}

/// Everything a controller can be configured with.
#[derive(Clone, Debug)]
pub struct GestureOptions {
    pub enabled: bool,
    pub event_options: EventOptions,
    /// Quiet period ending wheel, scroll and move sessions.
    pub debounce: Option<Duration>,
    pub drag: DragOptions,
    pub moves: CoordinatesOptions,
    pub hover: CoordinatesOptions,
    pub wheel: CoordinatesOptions,
    pub scroll: CoordinatesOptions,
    pub pinch: PinchOptions,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            event_options: EventOptions::default(),
            debounce: None,
            drag: DragOptions::default(),
            moves: CoordinatesOptions::default(),
            hover: CoordinatesOptions::default(),
            wheel: CoordinatesOptions::default(),
            scroll: CoordinatesOptions::default(),
            pinch: PinchOptions::default(),
        }
    }
}

impl GestureOptions {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn event_options(mut self, event_options: EventOptions) -> Self {
        self.event_options = event_options;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = Some(debounce);
        self
    }

    pub fn drag(mut self, drag: DragOptions) -> Self {
        self.drag = drag;
        self
    }

    pub fn moves(mut self, moves: CoordinatesOptions) -> Self {
        self.moves = moves;
        self
    }

    pub fn hover(mut self, hover: CoordinatesOptions) -> Self {
        self.hover = hover;
        self
    }

    pub fn wheel(mut self, wheel: CoordinatesOptions) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn scroll(mut self, scroll: CoordinatesOptions) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn pinch(mut self, pinch: PinchOptions) -> Self {
        self.pinch = pinch;
        self
    }
}
