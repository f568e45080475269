use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::BoundsSource;
use crate::controller::frames::FrameQueue;
use crate::controller::listeners::WindowListenerRegistry;
use crate::controller::timers::TimerTable;
use crate::controller::GestureHandler;
use crate::input::{PointerEvent, PointerEventKind, ScrollEvent, WheelEvent};
use crate::state::SharedState;
use gestura_math::{AxisRange, Bounds};
use web_time::Duration;

struct Harness {
    config: GestureConfig,
    shared: SharedState,
    state: GestureState,
    timers: TimerTable,
    listeners: WindowListenerRegistry,
    frames: FrameQueue,
    handler: Option<GestureHandler>,
    calls: Rc<RefCell<Vec<GestureState>>>,
}

impl Harness {
    fn new(config: GestureConfig) -> Self {
        let calls: Rc<RefCell<Vec<GestureState>>> = Rc::default();
        let sink = calls.clone();
        Self {
            config,
            shared: SharedState::default(),
            state: GestureState::default(),
            timers: TimerTable::default(),
            listeners: WindowListenerRegistry::default(),
            frames: FrameQueue::default(),
            handler: Some(Box::new(move |event| {
                sink.borrow_mut().push(event.state.clone());
                None
            })),
            calls,
        }
    }

    fn cx(&mut self, kind: GestureKind) -> GestureContext<'_> {
        GestureContext {
            kind,
            config: &self.config,
            debounce: Duration::from_millis(140),
            event_options: Default::default(),
            shared: &mut self.shared,
            state: &mut self.state,
            handler: self.handler.as_mut(),
            args: None,
            timers: &mut self.timers,
            listeners: &mut self.listeners,
            frames: &mut self.frames,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

fn pointer(x: f32, y: f32, time: Instant) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(
        PointerEventKind::Move,
        Vec2::new(x, y),
        time,
    ))
}

#[test]
fn intentional_displacement_is_signed_threshold() {
    assert_eq!(intentional_displacement(2.0, 3.0), None);
    assert_eq!(intentional_displacement(3.0, 3.0), Some(3.0));
    assert_eq!(intentional_displacement(-7.5, 3.0), Some(-3.0));
    assert_eq!(intentional_displacement(0.0, 0.0), Some(0.0));
}

#[test]
fn movement_has_a_runway_until_threshold() {
    let mut harness = Harness::new(GestureConfig {
        threshold: Vec2::new(10.0, 10.0),
        ..GestureConfig::default()
    });
    let now = Instant::now();
    let cx = &mut harness.cx(GestureKind::Drag);
    DragRecognizer.start_session(
        cx,
        Vec2::ZERO,
        Vec2::ZERO,
        pointer(0.0, 0.0, now),
        InputSnapshot::default(),
    );

    DragRecognizer.update_movement(cx, Vec2::new(6.0, 0.0));
    assert_eq!(cx.state.movement, Vec2::ZERO);
    assert!(!cx.state.is_intentional());

    DragRecognizer.update_movement(cx, Vec2::new(12.0, 4.0));
    assert_eq!(cx.state.movement, Vec2::new(2.0, 0.0));
    assert_eq!(cx.state.intentional, [Some(10.0), None]);

    DragRecognizer.update_movement(cx, Vec2::new(15.0, 4.0));
    assert_eq!(cx.state.movement, Vec2::new(5.0, 0.0));
    assert_eq!(cx.state.delta, Vec2::new(3.0, 0.0));
}

#[test]
fn released_values_settle_inside_bounds() {
    let mut harness = Harness::new(GestureConfig {
        rubberband: Vec2::splat(0.5),
        bounds: BoundsSource::Static(Bounds::new(
            AxisRange::new(0.0, 10.0),
            AxisRange::UNBOUNDED,
        )),
        ..GestureConfig::default()
    });
    let now = Instant::now();
    let cx = &mut harness.cx(GestureKind::Drag);
    DragRecognizer.start_session(
        cx,
        Vec2::ZERO,
        Vec2::ZERO,
        pointer(0.0, 0.0, now),
        InputSnapshot::default(),
    );
    DragRecognizer.update_movement(cx, Vec2::new(20.0, 0.0));
    let stretched = cx.state.movement.x;
    assert!(stretched > 10.0 && stretched < 20.0, "stretched {stretched}");

    cx.state.engaged = false;
    DragRecognizer.update_movement(cx, Vec2::new(20.0, 0.0));
    assert_eq!(cx.state.movement.x, 10.0);
    assert_eq!(cx.state.offset.x, 10.0);
}

#[test]
fn zero_elapsed_time_keeps_velocity_at_zero() {
    let mut harness = Harness::new(GestureConfig::default());
    let now = Instant::now();
    let cx = &mut harness.cx(GestureKind::Drag);
    DragRecognizer.start_session(
        cx,
        Vec2::ZERO,
        Vec2::ZERO,
        pointer(0.0, 0.0, now),
        InputSnapshot::default(),
    );
    DragRecognizer.update_kinematics(cx, Vec2::new(5.0, 5.0), now);
    assert_eq!(cx.state.velocity, 0.0);
    assert_eq!(cx.state.velocities, Vec2::ZERO);
    assert_eq!(cx.state.delta, Vec2::new(5.0, 5.0));
}

#[test]
fn blocked_axis_ends_non_debounced_session_quietly() {
    let mut harness = Harness::new(GestureConfig {
        axis: Some(Axis::X),
        threshold: Vec2::splat(1.0),
        ..GestureConfig::default()
    });
    let now = Instant::now();
    let cx = &mut harness.cx(GestureKind::Drag);
    DragRecognizer.start_session(
        cx,
        Vec2::ZERO,
        Vec2::ZERO,
        pointer(0.0, 0.0, now),
        InputSnapshot::default(),
    );
    DragRecognizer.update_movement(cx, Vec2::new(1.0, 8.0));
    assert!(cx.state.blocked);
    assert_eq!(DragRecognizer.fire(cx, false), Outcome::Updated);
    assert!(!cx.state.is_engaged());
    assert_eq!(harness.call_count(), 0);
}

#[test]
fn debounced_session_ends_once() {
    let mut harness = Harness::new(GestureConfig::default());
    let now = Instant::now();
    let tick = |time| InputEvent::Wheel(WheelEvent::new(Vec2::new(0.0, 10.0), time));

    let cx = &mut harness.cx(GestureKind::Wheel);
    let outcome = WheelRecognizer.debounced_tick(
        cx,
        Vec2::new(0.0, 10.0),
        Vec2::ZERO,
        tick(now),
        InputSnapshot::default(),
    );
    assert_eq!(outcome, Outcome::Fired);
    let later = now + Duration::from_millis(50);
    WheelRecognizer.debounced_tick(
        cx,
        Vec2::new(0.0, 20.0),
        Vec2::ZERO,
        tick(later),
        InputSnapshot::default(),
    );
    let deadline = cx.timers.get(GestureKind::Wheel).map(|timer| timer.deadline);
    assert_eq!(deadline, Some(later + Duration::from_millis(140)));

    assert_eq!(WheelRecognizer.end_debounced(cx), Outcome::Fired);
    assert_eq!(
        WheelRecognizer.end_debounced(cx),
        Outcome::Ignored(IgnoreReason::Inactive)
    );
    assert!(cx.timers.get(GestureKind::Wheel).is_none());

    let calls = harness.calls.borrow();
    assert_eq!(calls.len(), 3);
    let last = &calls[2];
    assert!(last.last && !last.active);
    assert_eq!(last.velocity, 0.0);
    assert_eq!(last.movement, Vec2::new(0.0, 20.0));
}

#[test]
fn cancel_is_idempotent_and_requests_one_frame() {
    let mut harness = Harness::new(GestureConfig::default());
    let now = Instant::now();
    let cx = &mut harness.cx(GestureKind::Scroll);
    ScrollRecognizer.debounced_tick(
        cx,
        Vec2::new(0.0, 30.0),
        Vec2::ZERO,
        InputEvent::Scroll(ScrollEvent::new(Vec2::new(0.0, 30.0), now)),
        InputSnapshot::default(),
    );
    assert_eq!(cancel_session(cx), Outcome::Updated);
    assert_eq!(cancel_session(cx), Outcome::Ignored(IgnoreReason::Canceled));
    assert!(cx.state.canceled);
    assert!(cx.timers.get(GestureKind::Scroll).is_none());
    assert!(cx.frames.contains(GestureKind::Scroll));
    assert_eq!(cx.frames.take().len(), 1);
}

#[test]
fn cancel_without_session_is_ignored() {
    let mut harness = Harness::new(GestureConfig::default());
    let cx = &mut harness.cx(GestureKind::Drag);
    assert_eq!(cancel_session(cx), Outcome::Ignored(IgnoreReason::Inactive));
    assert!(cx.frames.is_empty());
}
