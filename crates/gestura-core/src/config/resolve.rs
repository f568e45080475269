use std::fmt;

use gestura_math::{Axis, AxisRange, Bounds, Vec2, DEFAULT_RUBBERBAND};
use web_time::Duration;

use super::options::{
    BoundsOption, CoordinatesOptions, DelayOption, DragOptions, EventOptions, GestureOptions,
    InitialOption, PinchOptions, RubberbandOption, StateFn, VectorOption,
};
use crate::gesture_constants::{
    AXIS_LOCK_THRESHOLD, DEFAULT_DEBOUNCE, DEFAULT_DRAG_DELAY, DEFAULT_SWIPE_DISTANCE,
    DEFAULT_SWIPE_VELOCITY, FILTER_TAPS_THRESHOLD,
};
use crate::state::{GestureKind, GestureMap, GestureState};

/// Bounds evaluated at session start.
#[derive(Clone)]
pub enum BoundsSource {
    Static(Bounds),
    Dynamic(StateFn<Bounds>),
}

impl BoundsSource {
    pub fn bounds(&self, state: &GestureState) -> Bounds {
        match self {
            BoundsSource::Static(bounds) => *bounds,
            BoundsSource::Dynamic(f) => sanitize_bounds(f(state)),
        }
    }
}

impl fmt::Debug for BoundsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsSource::Static(bounds) => f.debug_tuple("Static").field(bounds).finish(),
            BoundsSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Initial movement evaluated at session start.
#[derive(Clone)]
pub enum InitialSource {
    Fixed(Vec2),
    Dynamic(StateFn<Vec2>),
}

impl InitialSource {
    pub fn initial(&self, state: &GestureState) -> Vec2 {
        let initial = match self {
            InitialSource::Fixed(v) => *v,
            InitialSource::Dynamic(f) => f(state),
        };
        if initial.is_finite() {
            initial
        } else {
            log::debug!("ignoring non-finite initial movement {:?}", initial);
            Vec2::ZERO
        }
    }
}

impl fmt::Debug for InitialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialSource::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            InitialSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Canonical, read-only config of one gesture kind.
#[derive(Clone, Debug)]
pub struct GestureConfig {
    pub enabled: bool,
    pub threshold: Vec2,
    pub rubberband: Vec2,
    pub bounds: BoundsSource,
    pub initial: InitialSource,
    pub axis: Option<Axis>,
    pub lock_direction: bool,
    pub delay: Duration,
    pub swipe_velocity: Vec2,
    pub swipe_distance: Vec2,
    pub filter_taps: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: Vec2::ZERO,
            rubberband: Vec2::ZERO,
            bounds: BoundsSource::Static(Bounds::UNBOUNDED),
            initial: InitialSource::Fixed(Vec2::ZERO),
            axis: None,
            lock_direction: false,
            delay: Duration::ZERO,
            swipe_velocity: Vec2::splat(DEFAULT_SWIPE_VELOCITY),
            swipe_distance: Vec2::splat(DEFAULT_SWIPE_DISTANCE),
            filter_taps: false,
        }
    }
}

/// Canonical config of a whole controller.
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    pub enabled: bool,
    pub event_options: EventOptions,
    pub debounce: Duration,
    pub gestures: GestureMap<GestureConfig>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::resolve(&GestureOptions::default())
    }
}

impl ControllerConfig {
    /// Resolves partial options field by field. Never fails: anything absent
    /// or unusable falls back to its default.
    pub fn resolve(options: &GestureOptions) -> Self {
        let gestures = GestureMap::from_fn(|kind| {
            let mut config = match kind {
                GestureKind::Drag => resolve_drag(&options.drag),
                GestureKind::Move => resolve_coordinates(kind, &options.moves, false),
                GestureKind::Hover => resolve_coordinates(kind, &options.hover, false),
                GestureKind::Wheel => resolve_coordinates(kind, &options.wheel, false),
                GestureKind::Scroll => resolve_coordinates(kind, &options.scroll, false),
                GestureKind::Pinch => resolve_pinch(&options.pinch),
            };
            config.enabled &= options.enabled;
            config
        });
        Self {
            enabled: options.enabled,
            event_options: options.event_options,
            debounce: options.debounce.unwrap_or(DEFAULT_DEBOUNCE),
            gestures,
        }
    }

    pub fn gesture(&self, kind: GestureKind) -> &GestureConfig {
        &self.gestures[kind]
    }
}

fn resolve_coordinates(
    kind: GestureKind,
    options: &CoordinatesOptions,
    filter_taps: bool,
) -> GestureConfig {
    let default_threshold = if filter_taps {
        FILTER_TAPS_THRESHOLD
    } else if options.lock_direction || options.axis.is_some() {
        AXIS_LOCK_THRESHOLD
    } else {
        0.0
    };
    GestureConfig {
        enabled: options.enabled.unwrap_or(true),
        threshold: resolve_vector(kind, "threshold", options.threshold, default_threshold),
        rubberband: resolve_rubberband(kind, options.rubberband),
        bounds: resolve_bounds(kind, options.bounds.as_ref()),
        initial: resolve_initial(options.initial.as_ref()),
        axis: options.axis,
        lock_direction: options.lock_direction,
        ..GestureConfig::default()
    }
}

fn resolve_drag(options: &DragOptions) -> GestureConfig {
    let kind = GestureKind::Drag;
    GestureConfig {
        filter_taps: options.filter_taps,
        delay: resolve_delay(options.delay),
        swipe_velocity: resolve_vector(
            kind,
            "swipe velocity",
            options.swipe_velocity,
            DEFAULT_SWIPE_VELOCITY,
        ),
        swipe_distance: resolve_vector(
            kind,
            "swipe distance",
            options.swipe_distance,
            DEFAULT_SWIPE_DISTANCE,
        ),
        ..resolve_coordinates(kind, &options.coordinates, options.filter_taps)
    }
}

fn resolve_pinch(options: &PinchOptions) -> GestureConfig {
    let kind = GestureKind::Pinch;
    GestureConfig {
        enabled: options.enabled.unwrap_or(true),
        threshold: resolve_vector(kind, "threshold", options.threshold, 0.0),
        rubberband: resolve_rubberband(kind, options.rubberband),
        bounds: resolve_bounds(kind, options.bounds.as_ref()),
        initial: resolve_initial(options.initial.as_ref()),
        ..GestureConfig::default()
    }
}

/// Non-negative finite components, each axis falling back to `default`.
fn resolve_vector(
    kind: GestureKind,
    field: &str,
    value: Option<VectorOption>,
    default: f32,
) -> Vec2 {
    let Some(value) = value else {
        return Vec2::splat(default);
    };
    value.to_vec2().map(|v| {
        if v.is_finite() && v >= 0.0 {
            v
        } else {
            log::debug!("{kind}: invalid {field} {v}, using {default}");
            default
        }
    })
}

fn resolve_rubberband(kind: GestureKind, value: Option<RubberbandOption>) -> Vec2 {
    let factors = match value {
        None | Some(RubberbandOption::Enabled(false)) => return Vec2::ZERO,
        Some(RubberbandOption::Enabled(true)) => return Vec2::splat(DEFAULT_RUBBERBAND),
        Some(RubberbandOption::Factor(f)) => Vec2::splat(f),
        Some(RubberbandOption::PerAxis(v)) => v,
    };
    factors.map(|f| {
        if !f.is_finite() {
            log::debug!("{kind}: non-finite rubberband factor, clamping instead");
            0.0
        } else if !(0.0..=1.0).contains(&f) {
            log::debug!("{kind}: rubberband factor {f} outside [0, 1]");
            f.clamp(0.0, 1.0)
        } else {
            f
        }
    })
}

fn resolve_delay(value: Option<DelayOption>) -> Duration {
    match value {
        None | Some(DelayOption::Enabled(false)) => Duration::ZERO,
        Some(DelayOption::Enabled(true)) => DEFAULT_DRAG_DELAY,
        Some(DelayOption::After(duration)) => duration,
        Some(DelayOption::Millis(ms)) if ms.is_finite() && ms >= 0.0 => {
            Duration::try_from_secs_f32(ms / 1000.0).unwrap_or_else(|_| {
                log::debug!("drag: delay {ms}ms out of range, starting immediately");
                Duration::ZERO
            })
        }
        Some(DelayOption::Millis(ms)) => {
            log::debug!("drag: invalid delay {ms}ms, starting immediately");
            Duration::ZERO
        }
    }
}

fn resolve_bounds(kind: GestureKind, value: Option<&BoundsOption>) -> BoundsSource {
    match value {
        None => BoundsSource::Static(Bounds::UNBOUNDED),
        Some(BoundsOption::Edges(edges)) => {
            let bounds = sanitize_bounds(edges.to_bounds());
            if bounds != edges.to_bounds() {
                log::debug!("{kind}: invalid bounds {:?}, axis left unbounded", edges);
            }
            BoundsSource::Static(bounds)
        }
        Some(BoundsOption::Dynamic(f)) => BoundsSource::Dynamic(f.clone()),
    }
}

fn resolve_initial(value: Option<&InitialOption>) -> InitialSource {
    match value {
        None => InitialSource::Fixed(Vec2::ZERO),
        Some(InitialOption::Fixed(v)) => InitialSource::Fixed(*v),
        Some(InitialOption::Dynamic(f)) => InitialSource::Dynamic(f.clone()),
    }
}

/// Replaces unusable axis ranges with an unbounded one.
pub(crate) fn sanitize_bounds(bounds: Bounds) -> Bounds {
    let axis = |range: AxisRange| {
        if range.is_valid() {
            range
        } else {
            AxisRange::UNBOUNDED
        }
    };
    Bounds::new(axis(bounds.x), axis(bounds.y))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
