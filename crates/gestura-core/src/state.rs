//! Gesture kinds and the state records recognizers write.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::rc::Rc;

use gestura_math::{Axis, Bounds, Vec2};
use web_time::{Duration, Instant};

use crate::input::{InputEvent, InputSnapshot, Modifiers, PointerButtons, PointerEvent, PointerId};

/// Closed set of gestures the controller recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Drag,
    Move,
    Hover,
    Wheel,
    Scroll,
    Pinch,
}

impl GestureKind {
    pub const COUNT: usize = 6;

    pub const ALL: [GestureKind; GestureKind::COUNT] = [
        GestureKind::Drag,
        GestureKind::Move,
        GestureKind::Hover,
        GestureKind::Wheel,
        GestureKind::Scroll,
        GestureKind::Pinch,
    ];

    pub const fn index(self) -> usize {
        match self {
            GestureKind::Drag => 0,
            GestureKind::Move => 1,
            GestureKind::Hover => 2,
            GestureKind::Wheel => 3,
            GestureKind::Scroll => 4,
            GestureKind::Pinch => 5,
        }
    }

    /// Kinds fed by discrete ticks with no natural end event.
    pub const fn is_debounced(self) -> bool {
        matches!(
            self,
            GestureKind::Move | GestureKind::Wheel | GestureKind::Scroll
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            GestureKind::Drag => "drag",
            GestureKind::Move => "move",
            GestureKind::Hover => "hover",
            GestureKind::Wheel => "wheel",
            GestureKind::Scroll => "scroll",
            GestureKind::Pinch => "pinch",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One slot per [`GestureKind`], indexed by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureMap<T>([T; GestureKind::COUNT]);

impl<T> GestureMap<T> {
    pub fn from_fn(mut f: impl FnMut(GestureKind) -> T) -> Self {
        Self(std::array::from_fn(|i| f(GestureKind::ALL[i])))
    }

    pub fn get(&self, kind: GestureKind) -> &T {
        &self.0[kind.index()]
    }

    pub fn get_mut(&mut self, kind: GestureKind) -> &mut T {
        &mut self.0[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GestureKind, &T)> {
        GestureKind::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GestureKind, &mut T)> {
        GestureKind::ALL.into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<GestureKind> for GestureMap<T> {
    type Output = T;

    fn index(&self, kind: GestureKind) -> &T {
        self.get(kind)
    }
}

impl<T> IndexMut<GestureKind> for GestureMap<T> {
    fn index_mut(&mut self, kind: GestureKind) -> &mut T {
        self.get_mut(kind)
    }
}

/// Opaque value returned by a handler and handed back on its next call.
#[derive(Clone)]
pub struct Memo(Rc<dyn Any>);

impl Memo {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Memo(..)")
    }
}

/// Cancellation request for one gesture session.
///
/// Calling [`CancelToken::cancel`] only records the request; the controller
/// acts on it once the current dispatch returns, so a handler can cancel its
/// own gesture without re-entering the recognizer. Each session gets a fresh
/// token, so a token kept from an earlier session has no effect.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }
}

/// State shared by every gesture of one controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SharedState {
    pub down: bool,
    pub buttons: PointerButtons,
    pub touches: u32,
    pub modifiers: Modifiers,
    pub dragging: bool,
    pub moving: bool,
    pub hovering: bool,
    pub wheeling: bool,
    pub scrolling: bool,
    pub pinching: bool,
}

impl SharedState {
    pub fn is_active(&self, kind: GestureKind) -> bool {
        match kind {
            GestureKind::Drag => self.dragging,
            GestureKind::Move => self.moving,
            GestureKind::Hover => self.hovering,
            GestureKind::Wheel => self.wheeling,
            GestureKind::Scroll => self.scrolling,
            GestureKind::Pinch => self.pinching,
        }
    }

    pub(crate) fn set_active(&mut self, kind: GestureKind, active: bool) {
        let flag = match kind {
            GestureKind::Drag => &mut self.dragging,
            GestureKind::Move => &mut self.moving,
            GestureKind::Hover => &mut self.hovering,
            GestureKind::Wheel => &mut self.wheeling,
            GestureKind::Scroll => &mut self.scrolling,
            GestureKind::Pinch => &mut self.pinching,
        };
        *flag = active;
    }

    pub(crate) fn apply(&mut self, snapshot: InputSnapshot) {
        self.down = snapshot.down;
        self.buttons = snapshot.buttons;
        self.touches = snapshot.touches;
        self.modifiers = snapshot.modifiers;
    }

    /// Input state as last applied.
    pub(crate) fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            down: self.down,
            buttons: self.buttons,
            touches: self.touches,
            modifiers: self.modifiers,
        }
    }

    /// Forgets pressed buttons and contacts, keeping modifiers.
    pub(crate) fn release(&mut self) {
        self.down = false;
        self.buttons = PointerButtons::NONE;
        self.touches = 0;
    }
}

/// Live state of one gesture kind.
///
/// One instance per kind lives as long as the controller and cycles through
/// sessions. Coordinates are pointer positions for drag, move and hover,
/// accumulated deltas for wheel, scroll offsets for scroll and
/// `[distance, angle]` for pinch.
#[derive(Clone, Debug)]
pub struct GestureState {
    /// Settled activity as last reported to the handler.
    pub active: bool,
    pub first: bool,
    pub last: bool,
    /// Raw last sample.
    pub values: Vec2,
    /// Raw sample before `values`.
    pub previous: Vec2,
    /// Raw sample the current session's movement is measured from.
    pub initial: Vec2,
    pub movement: Vec2,
    /// Movement accumulated across sessions.
    pub offset: Vec2,
    /// `offset` when the current session started.
    pub last_offset: Vec2,
    pub delta: Vec2,
    pub velocity: f32,
    pub velocities: Vec2,
    pub distance: f32,
    pub direction: Vec2,
    /// Per axis: `None` until the threshold is crossed, then the signed
    /// threshold, frozen for the session.
    pub intentional: [Option<f32>; 2],
    pub blocked: bool,
    /// Dominant axis, decided once per session under axis or direction lock.
    pub axis: Option<Axis>,
    pub start_time: Option<Instant>,
    pub time_stamp: Option<Instant>,
    pub elapsed_time: Duration,
    pub memo: Option<Memo>,
    pub cancel: CancelToken,
    pub canceled: bool,
    pub event: Option<InputEvent>,
    /// Drag: the session has not travelled past the tap distance.
    pub tap: bool,
    /// Drag: `-1`, `0` or `1` per axis, set on release.
    pub swipe: [i8; 2],
    /// Pinch: midpoint between the two contacts.
    pub origin: Vec2,
    /// Pinch: completed turns of the angle.
    pub turns: i32,

    /// Session engaged, set before the handler sees it.
    pub(crate) engaged: bool,
    pub(crate) raw_movement: Vec2,
    pub(crate) bounds: Bounds,
    pub(crate) initial_movement: Vec2,
    pub(crate) pointer_id: Option<PointerId>,
    pub(crate) pending: Option<PointerEvent>,
    pub(crate) touch_ids: Option<[PointerId; 2]>,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            active: false,
            first: false,
            last: false,
            values: Vec2::ZERO,
            previous: Vec2::ZERO,
            initial: Vec2::ZERO,
            movement: Vec2::ZERO,
            offset: Vec2::ZERO,
            last_offset: Vec2::ZERO,
            delta: Vec2::ZERO,
            velocity: 0.0,
            velocities: Vec2::ZERO,
            distance: 0.0,
            direction: Vec2::ZERO,
            intentional: [None, None],
            blocked: false,
            axis: None,
            start_time: None,
            time_stamp: None,
            elapsed_time: Duration::ZERO,
            memo: None,
            cancel: CancelToken::default(),
            canceled: false,
            event: None,
            tap: false,
            swipe: [0, 0],
            origin: Vec2::ZERO,
            turns: 0,
            engaged: false,
            raw_movement: Vec2::ZERO,
            bounds: Bounds::UNBOUNDED,
            initial_movement: Vec2::ZERO,
            pointer_id: None,
            pending: None,
            touch_ids: None,
        }
    }
}

impl GestureState {
    /// True when at least one axis crossed its threshold.
    pub fn is_intentional(&self) -> bool {
        self.intentional.iter().any(Option::is_some)
    }

    /// True between session start and end, before the handler has seen it.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// True while a delayed drag start is waiting on its timer.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Raw displacement from the session start, before thresholds.
    pub fn raw_movement(&self) -> Vec2 {
        self.raw_movement
    }

    /// Opens a new session at `values`.
    ///
    /// Everything except `offset` and `active` is reset; `last_offset`
    /// captures the offset the session builds on.
    pub(crate) fn begin(&mut self, values: Vec2, time: Instant) {
        let offset = self.offset;
        let active = self.active;
        *self = GestureState {
            active,
            offset,
            last_offset: offset,
            values,
            previous: values,
            initial: values,
            start_time: Some(time),
            time_stamp: Some(time),
            engaged: true,
            ..GestureState::default()
        };
    }

    pub(crate) fn stamp(&mut self, time: Instant) {
        self.time_stamp = Some(time);
        if let Some(start) = self.start_time {
            self.elapsed_time = time.saturating_duration_since(start);
        }
    }
}
