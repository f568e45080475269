use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::{DragOptions, EventOptions};
use crate::input::{Modifiers, PointerEventKind, TouchPoint};
use gestura_math::Vec2;
use web_time::Duration;

type Log = Rc<RefCell<Vec<(GestureKind, bool, bool, bool, bool)>>>;

fn recording(controller: &mut Controller, kind: GestureKind) -> Log {
    let log = Log::default();
    let sink = log.clone();
    controller.on(kind, move |event| {
        sink.borrow_mut()
            .push((event.kind, event.first, event.last, event.active, event.canceled));
        None
    });
    log
}

fn pointer(kind: PointerEventKind, x: f32, y: f32, time: Instant) -> PointerEvent {
    PointerEvent::new(kind, Vec2::new(x, y), time)
}

#[derive(Clone, Default)]
struct Window(Rc<RefCell<Vec<(bool, WindowEventType)>>>);

impl WindowBinding for Window {
    fn attach(&mut self, _: GestureKind, event: WindowEventType, _: EventOptions) {
        self.0.borrow_mut().push((true, event));
    }

    fn detach(&mut self, _: GestureKind, event: WindowEventType, _: EventOptions) {
        self.0.borrow_mut().push((false, event));
    }
}

#[derive(Clone, Default)]
struct OptionsWindow(Rc<RefCell<Vec<(bool, EventOptions)>>>);

impl WindowBinding for OptionsWindow {
    fn attach(&mut self, _: GestureKind, _: WindowEventType, options: EventOptions) {
        self.0.borrow_mut().push((true, options));
    }

    fn detach(&mut self, _: GestureKind, _: WindowEventType, options: EventOptions) {
        self.0.borrow_mut().push((false, options));
    }
}

#[test]
fn bindings_list_only_bound_kinds() {
    let mut controller = Controller::default();
    assert!(controller.bindings().is_empty());
    controller.on(GestureKind::Drag, |_| None);
    controller.on(GestureKind::Hover, |_| None);
    let bindings = controller.bindings();
    assert_eq!(bindings.len(), 3);
    assert!(bindings.contains(&EventBinding {
        kind: GestureKind::Drag,
        event: ElementEvent::PointerDown,
    }));
    assert!(bindings.contains(&EventBinding {
        kind: GestureKind::Hover,
        event: ElementEvent::PointerLeave,
    }));

    controller.set_options(GestureOptions::default().drag(DragOptions::default().enabled(false)));
    assert_eq!(controller.bindings().len(), 2);
}

#[test]
fn unbound_kind_reports_disabled() {
    let mut controller = Controller::default();
    let now = Instant::now();
    let report = controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, now));
    assert_eq!(
        report.outcome(GestureKind::Drag),
        Some(Outcome::Ignored(IgnoreReason::Disabled))
    );
    assert!(controller.window_listeners(GestureKind::Drag).is_empty());
}

#[test]
fn window_events_need_attached_listeners() {
    let mut controller = Controller::default();
    let log = recording(&mut controller, GestureKind::Drag);
    let now = Instant::now();
    let report =
        controller.on_window_pointer_move(&pointer(PointerEventKind::Move, 5.0, 5.0, now));
    assert_eq!(
        report.outcome(GestureKind::Drag),
        Some(Outcome::Ignored(IgnoreReason::NotApplicable))
    );

    controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, now));
    assert_eq!(
        controller.window_listeners(GestureKind::Drag),
        &WindowEventType::POINTER
    );
    let later = now + Duration::from_millis(16);
    let report =
        controller.on_window_pointer_move(&pointer(PointerEventKind::Move, 5.0, 5.0, later));
    assert!(report.fired(GestureKind::Drag));
    controller.on_window_pointer_up(&pointer(PointerEventKind::Up, 5.0, 5.0, later));
    assert!(controller.window_listeners(GestureKind::Drag).is_empty());
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn ctrl_wheel_goes_to_pinch_when_bound() {
    let mut controller = Controller::default();
    recording(&mut controller, GestureKind::Wheel);
    let now = Instant::now();
    let event = WheelEvent::new(Vec2::new(0.0, 10.0), now).with_modifiers(Modifiers::CTRL);

    let report = controller.on_wheel(&event);
    assert!(report.fired(GestureKind::Wheel));
    assert_eq!(report.outcome(GestureKind::Pinch), None);

    recording(&mut controller, GestureKind::Pinch);
    let report = controller.on_wheel(&event);
    assert_eq!(
        report.outcome(GestureKind::Wheel),
        Some(Outcome::Ignored(IgnoreReason::NotApplicable))
    );
    assert!(report.fired(GestureKind::Pinch));
    assert_eq!(controller.state(GestureKind::Pinch).values.x, -10.0);
}

#[test]
fn handler_cancel_takes_effect_after_dispatch() {
    let mut controller = Controller::default();
    let log = Log::default();
    let sink = log.clone();
    controller.on(GestureKind::Drag, move |event| {
        sink.borrow_mut()
            .push((event.kind, event.first, event.last, event.active, event.canceled));
        if event.movement.x > 10.0 {
            event.cancel();
        }
        None
    });
    let now = Instant::now();
    controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, now));
    controller.on_window_pointer_move(&pointer(
        PointerEventKind::Move,
        20.0,
        0.0,
        now + Duration::from_millis(16),
    ));

    let state = controller.state(GestureKind::Drag);
    assert!(state.canceled);
    assert!(!state.is_engaged());
    assert!(controller.has_pending_frame());
    assert!(controller.window_listeners(GestureKind::Drag).is_empty());
    assert_eq!(
        controller.cancel(GestureKind::Drag),
        Outcome::Ignored(IgnoreReason::Canceled)
    );

    let report = controller.on_animation_frame(now + Duration::from_millis(32));
    assert!(report.fired(GestureKind::Drag));
    assert!(!controller.has_pending_frame());
    let last = log.borrow().last().copied();
    assert_eq!(last, Some((GestureKind::Drag, false, true, false, true)));
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn pending_cancel_frame_is_flushed_before_next_session() {
    let mut controller = Controller::default();
    let log = recording(&mut controller, GestureKind::Drag);
    let now = Instant::now();
    controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, now));
    assert_eq!(controller.cancel(GestureKind::Drag), Outcome::Updated);

    let report = controller.on_pointer_down(&pointer(PointerEventKind::Down, 3.0, 3.0, now));
    let outcomes: Vec<_> = report.entries().iter().map(|(_, outcome)| *outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Fired, Outcome::Fired]);
    let entries = log.borrow();
    assert_eq!(entries.len(), 3);
    assert!(entries[1].4, "second call reports the cancellation");
    assert!(entries[2].1, "third call starts a new session");
}

#[test]
fn reset_forgets_offset_and_resources() {
    let mut controller = Controller::default();
    recording(&mut controller, GestureKind::Drag);
    let now = Instant::now();
    controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, now));
    controller.on_window_pointer_move(&pointer(PointerEventKind::Move, 40.0, 0.0, now));
    assert_eq!(controller.state(GestureKind::Drag).offset, Vec2::new(40.0, 0.0));

    controller.reset(GestureKind::Drag);
    assert_eq!(controller.state(GestureKind::Drag).offset, Vec2::ZERO);
    assert!(!controller.shared().dragging);
    assert!(controller.window_listeners(GestureKind::Drag).is_empty());
}

#[test]
fn drop_detaches_window_listeners() {
    let window = Window::default();
    let calls = window.0.clone();
    {
        let mut controller = Controller::with_window(GestureOptions::default(), window);
        recording(&mut controller, GestureKind::Drag);
        controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, Instant::now()));
        assert_eq!(calls.borrow().len(), 3);
    }
    let calls = calls.borrow();
    assert_eq!(calls.len(), 6);
    assert!(calls[3..].iter().all(|(attached, _)| !attached));
}

#[test]
fn touch_phases_reach_pinch() {
    let mut controller = Controller::default();
    recording(&mut controller, GestureKind::Pinch);
    let now = Instant::now();
    let a = TouchPoint::new(1, Vec2::new(0.0, 0.0));
    let b = TouchPoint::new(2, Vec2::new(0.0, 100.0));

    let report = controller.on_touch(&TouchEvent::new(TouchPhase::Start, &[a], now));
    assert_eq!(
        report.outcome(GestureKind::Pinch),
        Some(Outcome::Ignored(IgnoreReason::NotEnoughTouches))
    );
    let report = controller.on_touch(&TouchEvent::new(TouchPhase::Start, &[a, b], now));
    assert!(report.fired(GestureKind::Pinch));
    assert_eq!(controller.shared().touches, 2);
    assert!(controller.shared().pinching);

    let end = TouchEvent::new(TouchPhase::End, &[a], now).with_changed(&[2]);
    let report = controller.on_touch(&end);
    assert!(report.fired(GestureKind::Pinch));
    assert!(!controller.shared().pinching);
    assert_eq!(controller.shared().touches, 1);
}

#[test]
fn listeners_detach_with_the_options_they_were_attached_with() {
    let window = OptionsWindow::default();
    let calls = window.0.clone();
    let mut controller = Controller::with_window(GestureOptions::default(), window);
    recording(&mut controller, GestureKind::Drag);
    let now = Instant::now();
    controller.on_pointer_down(&pointer(PointerEventKind::Down, 0.0, 0.0, now));

    let capturing = EventOptions {
        passive: true,
        capture: true,
    };
    controller.set_options(GestureOptions::default().event_options(capturing));
    controller.on_window_pointer_up(&pointer(PointerEventKind::Up, 0.0, 0.0, now));

    let calls = calls.borrow();
    assert_eq!(calls.len(), 6);
    assert!(calls
        .iter()
        .all(|(_, options)| *options == EventOptions::default()));
}
