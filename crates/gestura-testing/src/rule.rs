//! Scripted input against a real [`Controller`] on a virtual clock.
//!
//! # Example
//!
//! ```
//! use gestura_core::{GestureKind, GestureOptions};
//! use gestura_testing::GestureTestRule;
//!
//! let mut rule = GestureTestRule::new(GestureOptions::default());
//! rule.record(GestureKind::Drag);
//!
//! rule.pointer_down(20.0, 50.0);
//! rule.advance(16);
//! rule.pointer_move(30.0, 80.0);
//! rule.pointer_up(30.0, 80.0);
//!
//! assert_eq!(rule.calls(GestureKind::Drag), 3);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use gestura_core::{
    Controller, DeltaMode, DispatchReport, GestureEvent, GestureKind, GestureMap, GestureOptions,
    GestureState, Memo, Modifiers, PointerButtons, PointerEvent, PointerEventKind, PointerId,
    PointerType, ScrollEvent, SharedState, StateValues, TouchEvent, TouchPhase, TouchPoint,
    WheelEvent,
};
use gestura_math::Vec2;
use web_time::{Duration, Instant};

use crate::window::RecordingWindow;

/// Everything a handler saw in one call.
#[derive(Clone, Debug)]
pub struct RecordedGesture {
    pub kind: GestureKind,
    pub shared: SharedState,
    pub state: GestureState,
    pub values: StateValues,
    pub args: Option<Memo>,
}

type Recording = Rc<RefCell<Vec<RecordedGesture>>>;

/// Test rule owning a controller, a recording window and a virtual clock.
///
/// The clock only moves through [`GestureTestRule::advance`], which also runs
/// every timer that came due.
pub struct GestureTestRule {
    controller: Controller,
    window: RecordingWindow,
    recordings: GestureMap<Recording>,
    start: Instant,
    now: Instant,
    pointer_id: PointerId,
    pointer_type: PointerType,
    pressed: bool,
    modifiers: Modifiers,
}

impl GestureTestRule {
    pub fn new(options: GestureOptions) -> Self {
        let window = RecordingWindow::new();
        let controller = Controller::with_window(options, window.clone());
        let now = Instant::now();
        Self {
            controller,
            window,
            recordings: GestureMap::default(),
            start: now,
            now,
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            pressed: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// Binds a handler to `kind` that records every call.
    pub fn record(&mut self, kind: GestureKind) -> &mut Self {
        self.record_with(kind, |_| None)
    }

    /// Like [`GestureTestRule::record`], forwarding each call to `handler`
    /// after it was recorded.
    pub fn record_with(
        &mut self,
        kind: GestureKind,
        mut handler: impl FnMut(&GestureEvent<'_>) -> Option<Memo> + 'static,
    ) -> &mut Self {
        let sink = self.recordings[kind].clone();
        sink.borrow_mut().clear();
        self.controller.on(kind, move |event| {
            sink.borrow_mut().push(RecordedGesture {
                kind: event.kind,
                shared: event.shared.clone(),
                state: event.state.clone(),
                values: event.values,
                args: event.args.cloned(),
            });
            handler(event)
        });
        self
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn window(&self) -> &RecordingWindow {
        &self.window
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Time since the rule was created.
    pub fn elapsed(&self) -> Duration {
        self.now - self.start
    }

    /// Moves the clock forward and runs the timers that came due.
    pub fn advance(&mut self, millis: u64) -> DispatchReport {
        self.now += Duration::from_millis(millis);
        self.controller.advance_timers(self.now)
    }

    /// Runs the pending animation frame, if any.
    pub fn frame(&mut self) -> DispatchReport {
        self.controller.on_animation_frame(self.now)
    }

    pub fn set_pointer(&mut self, id: PointerId, pointer_type: PointerType) -> &mut Self {
        self.pointer_id = id;
        self.pointer_type = pointer_type;
        self
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        self.modifiers = modifiers;
        self
    }

    fn pointer_event(&self, kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        let buttons = if self.pressed {
            PointerButtons::PRIMARY
        } else {
            PointerButtons::NONE
        };
        PointerEvent::new(kind, Vec2::new(x, y), self.now)
            .with_id(self.pointer_id)
            .with_pointer_type(self.pointer_type)
            .with_buttons(buttons)
            .with_modifiers(self.modifiers)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> DispatchReport {
        self.pressed = true;
        let event = self.pointer_event(PointerEventKind::Down, x, y);
        self.controller.on_pointer_down(&event)
    }

    /// Pointer move as a host delivers it: to the element and to the window.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> DispatchReport {
        let event = self.pointer_event(PointerEventKind::Move, x, y);
        let mut report = self.controller.on_pointer_move(&event);
        report.merge(self.controller.on_window_pointer_move(&event));
        report
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> DispatchReport {
        self.pressed = false;
        let event = self.pointer_event(PointerEventKind::Up, x, y);
        self.controller.on_window_pointer_up(&event)
    }

    pub fn pointer_cancel(&mut self, x: f32, y: f32) -> DispatchReport {
        self.pressed = false;
        let event = self.pointer_event(PointerEventKind::Cancel, x, y);
        self.controller.on_window_pointer_cancel(&event)
    }

    pub fn pointer_enter(&mut self, x: f32, y: f32) -> DispatchReport {
        let event = self.pointer_event(PointerEventKind::Enter, x, y);
        self.controller.on_pointer_enter(&event)
    }

    pub fn pointer_leave(&mut self, x: f32, y: f32) -> DispatchReport {
        let event = self.pointer_event(PointerEventKind::Leave, x, y);
        self.controller.on_pointer_leave(&event)
    }

    pub fn wheel(&mut self, dx: f32, dy: f32) -> DispatchReport {
        self.wheel_with_mode(dx, dy, DeltaMode::Pixel)
    }

    pub fn wheel_with_mode(&mut self, dx: f32, dy: f32, mode: DeltaMode) -> DispatchReport {
        let event = WheelEvent::new(Vec2::new(dx, dy), self.now)
            .with_delta_mode(mode)
            .with_modifiers(self.modifiers);
        self.controller.on_wheel(&event)
    }

    /// Trackpad pinch: a wheel tick with ctrl held, at `origin`.
    pub fn ctrl_wheel(&mut self, dy: f32, origin: Vec2) -> DispatchReport {
        let modifiers = Modifiers {
            ctrl: true,
            ..self.modifiers
        };
        let event = WheelEvent::new(Vec2::new(0.0, dy), self.now)
            .with_position(origin)
            .with_modifiers(modifiers);
        self.controller.on_wheel(&event)
    }

    pub fn scroll(&mut self, x: f32, y: f32) -> DispatchReport {
        let mut event = ScrollEvent::new(Vec2::new(x, y), self.now);
        event.modifiers = self.modifiers;
        self.controller.on_scroll(&event)
    }

    pub fn touch_start(&mut self, touches: &[(PointerId, f32, f32)]) -> DispatchReport {
        self.touch(TouchPhase::Start, touches, None)
    }

    pub fn touch_move(&mut self, touches: &[(PointerId, f32, f32)]) -> DispatchReport {
        self.touch(TouchPhase::Move, touches, None)
    }

    /// `remaining` are the contacts still down, `lifted` the ones released.
    pub fn touch_end(
        &mut self,
        remaining: &[(PointerId, f32, f32)],
        lifted: &[PointerId],
    ) -> DispatchReport {
        self.touch(TouchPhase::End, remaining, Some(lifted))
    }

    fn touch(
        &mut self,
        phase: TouchPhase,
        touches: &[(PointerId, f32, f32)],
        changed: Option<&[PointerId]>,
    ) -> DispatchReport {
        let points: Vec<TouchPoint> = touches
            .iter()
            .map(|&(id, x, y)| TouchPoint::new(id, Vec2::new(x, y)))
            .collect();
        let mut event = TouchEvent::new(phase, &points, self.now);
        if let Some(changed) = changed {
            event = event.with_changed(changed);
        }
        event.modifiers = self.modifiers;
        self.controller.on_touch(&event)
    }

    /// Every recorded call for `kind`, oldest first.
    pub fn recorded(&self, kind: GestureKind) -> Vec<RecordedGesture> {
        self.recordings[kind].borrow().clone()
    }

    pub fn last(&self, kind: GestureKind) -> Option<RecordedGesture> {
        self.recordings[kind].borrow().last().cloned()
    }

    pub fn calls(&self, kind: GestureKind) -> usize {
        self.recordings[kind].borrow().len()
    }

    pub fn state(&self, kind: GestureKind) -> &GestureState {
        self.controller.state(kind)
    }
}

