//! The controller: owner of config, shared state, per-kind gesture state and
//! every side-table a session acquires.
//!
//! Hosts feed raw events into the `on_*` entry points, drive time through
//! [`Controller::advance_timers`] and [`Controller::on_animation_frame`], and
//! implement [`WindowBinding`] for listeners that outlive the element. Each
//! entry point returns a [`DispatchReport`] naming what every reached
//! recognizer did.

pub(crate) mod frames;
pub(crate) mod listeners;
pub(crate) mod timers;

pub use listeners::{WindowBinding, WindowEventType};
pub use timers::{Timer, TimerAction, TimerId};

use web_time::Instant;

use crate::config::{ControllerConfig, GestureOptions};
use crate::event::GestureEvent;
use crate::input::{
    PointerEvent, PointerTracker, ScrollEvent, TouchEvent, TouchPhase, WheelEvent,
};
use crate::outcome::{DispatchReport, IgnoreReason, Outcome};
use crate::recognizer::{
    cancel_session, DragRecognizer, ElementEvent, GestureContext, HoverRecognizer,
    MoveRecognizer, PinchRecognizer, Recognizer, ScrollRecognizer, WheelRecognizer,
};
use crate::state::{GestureKind, GestureMap, GestureState, Memo, SharedState};

use frames::FrameQueue;
use listeners::WindowListenerRegistry;
use timers::TimerTable;

/// User callback for one gesture kind. Returning `Some` replaces the memo
/// handed back on the next call.
pub type GestureHandler = Box<dyn FnMut(&GestureEvent<'_>) -> Option<Memo>>;

/// One element-level event the host has to forward for a bound kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventBinding {
    pub kind: GestureKind,
    pub event: ElementEvent,
}

pub struct Controller {
    config: ControllerConfig,
    shared: SharedState,
    states: GestureMap<GestureState>,
    handlers: GestureMap<Option<GestureHandler>>,
    timers: TimerTable,
    listeners: WindowListenerRegistry,
    frames: FrameQueue,
    pointers: PointerTracker,
    args: Option<Memo>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}

impl Controller {
    pub fn new(options: GestureOptions) -> Self {
        Self::build(options, None)
    }

    /// Controller whose window listeners are mirrored onto `binding`.
    pub fn with_window(options: GestureOptions, binding: impl WindowBinding + 'static) -> Self {
        Self::build(options, Some(Box::new(binding)))
    }

    fn build(options: GestureOptions, binding: Option<Box<dyn WindowBinding>>) -> Self {
        Self {
            config: ControllerConfig::resolve(&options),
            shared: SharedState::default(),
            states: GestureMap::default(),
            handlers: GestureMap::default(),
            timers: TimerTable::default(),
            listeners: WindowListenerRegistry::new(binding),
            frames: FrameQueue::default(),
            pointers: PointerTracker::default(),
            args: None,
        }
    }

    /// Builder form of [`Controller::on`].
    pub fn with_handler(
        mut self,
        kind: GestureKind,
        handler: impl FnMut(&GestureEvent<'_>) -> Option<Memo> + 'static,
    ) -> Self {
        self.on(kind, handler);
        self
    }

    /// Binds `handler` to `kind`, replacing any previous one.
    pub fn on(
        &mut self,
        kind: GestureKind,
        handler: impl FnMut(&GestureEvent<'_>) -> Option<Memo> + 'static,
    ) {
        self.handlers[kind] = Some(Box::new(handler));
    }

    /// Unbinds `kind`. A running session keeps its state but no longer
    /// reaches a handler.
    pub fn off(&mut self, kind: GestureKind) {
        self.handlers[kind] = None;
    }

    pub fn is_bound(&self, kind: GestureKind) -> bool {
        self.config.gesture(kind).enabled && self.handlers[kind].is_some()
    }

    /// Rebuilds the canonical config. Live sessions keep running.
    pub fn set_options(&mut self, options: GestureOptions) {
        self.config = ControllerConfig::resolve(&options);
        log::debug!("controller options updated");
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Opaque value forwarded to every handler call.
    pub fn set_args(&mut self, args: Option<Memo>) {
        self.args = args;
    }

    /// Element-level events the host has to forward, per bound kind.
    pub fn bindings(&self) -> Vec<EventBinding> {
        GestureKind::ALL
            .into_iter()
            .filter(|kind| self.is_bound(*kind))
            .flat_map(|kind| {
                element_events(kind)
                    .iter()
                    .map(move |&event| EventBinding { kind, event })
            })
            .collect()
    }

    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    pub fn state(&self, kind: GestureKind) -> &GestureState {
        &self.states[kind]
    }

    pub fn window_listeners(&self, kind: GestureKind) -> &[WindowEventType] {
        self.listeners.attached(kind)
    }

    pub fn pending_timer(&self, kind: GestureKind) -> Option<Timer> {
        self.timers.get(kind).copied()
    }

    /// Earliest instant [`Controller::advance_timers`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// True when the host should call [`Controller::on_animation_frame`].
    pub fn has_pending_frame(&self) -> bool {
        !self.frames.is_empty()
    }

    fn context(&mut self, kind: GestureKind) -> GestureContext<'_> {
        GestureContext {
            kind,
            config: self.config.gesture(kind),
            debounce: self.config.debounce,
            event_options: self.config.event_options,
            shared: &mut self.shared,
            state: &mut self.states[kind],
            handler: self.handlers[kind].as_mut(),
            args: self.args.as_ref(),
            timers: &mut self.timers,
            listeners: &mut self.listeners,
            frames: &mut self.frames,
        }
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> DispatchReport {
        let snapshot = self.pointers.pointer(event);
        let mut report = self.flush_frame(GestureKind::Drag);
        let outcome = DragRecognizer.on_pointer_down(
            &mut self.context(GestureKind::Drag),
            event,
            snapshot,
        );
        self.finish(&mut report, GestureKind::Drag, outcome);
        report
    }

    /// Element-level pointer move, with or without buttons.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> DispatchReport {
        let snapshot = self.pointers.pointer(event);
        let mut report = self.flush_frame(GestureKind::Move);
        let outcome =
            MoveRecognizer.on_pointer_move(&mut self.context(GestureKind::Move), event, snapshot);
        self.finish(&mut report, GestureKind::Move, outcome);
        report
    }

    pub fn on_pointer_enter(&mut self, event: &PointerEvent) -> DispatchReport {
        let snapshot = self.pointers.pointer(event);
        let mut report = self.flush_frame(GestureKind::Hover);
        let outcome = HoverRecognizer.on_pointer_enter(
            &mut self.context(GestureKind::Hover),
            event,
            snapshot,
        );
        self.finish(&mut report, GestureKind::Hover, outcome);
        report
    }

    pub fn on_pointer_leave(&mut self, event: &PointerEvent) -> DispatchReport {
        let snapshot = self.pointers.pointer(event);
        let mut report = self.flush_frame(GestureKind::Hover);
        let outcome = HoverRecognizer.on_pointer_leave(
            &mut self.context(GestureKind::Hover),
            event,
            snapshot,
        );
        self.finish(&mut report, GestureKind::Hover, outcome);
        report
    }

    /// Window-scoped pointer move. Reaches the drag only while its window
    /// listeners are attached.
    pub fn on_window_pointer_move(&mut self, event: &PointerEvent) -> DispatchReport {
        let snapshot = self.pointers.pointer(event);
        let mut report = self.flush_frame(GestureKind::Drag);
        let outcome = if self
            .listeners
            .is_attached(GestureKind::Drag, WindowEventType::PointerMove)
        {
            DragRecognizer.on_pointer_move(&mut self.context(GestureKind::Drag), event, snapshot)
        } else {
            Outcome::Ignored(IgnoreReason::NotApplicable)
        };
        self.finish(&mut report, GestureKind::Drag, outcome);
        report
    }

    pub fn on_window_pointer_up(&mut self, event: &PointerEvent) -> DispatchReport {
        self.window_release(event, WindowEventType::PointerUp)
    }

    pub fn on_window_pointer_cancel(&mut self, event: &PointerEvent) -> DispatchReport {
        self.window_release(event, WindowEventType::PointerCancel)
    }

    fn window_release(&mut self, event: &PointerEvent, listener: WindowEventType) -> DispatchReport {
        let snapshot = self.pointers.pointer(event);
        let mut report = self.flush_frame(GestureKind::Drag);
        let outcome = if self.listeners.is_attached(GestureKind::Drag, listener) {
            DragRecognizer.on_pointer_up(&mut self.context(GestureKind::Drag), event, snapshot)
        } else {
            Outcome::Ignored(IgnoreReason::NotApplicable)
        };
        self.finish(&mut report, GestureKind::Drag, outcome);
        report
    }

    /// Wheel ticks go to the wheel gesture, except ctrl+wheel which is a
    /// trackpad pinch whenever pinch is bound.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> DispatchReport {
        let snapshot = self.pointers.wheel(event);
        let pinch = event.modifiers.ctrl && self.is_bound(GestureKind::Pinch);
        let mut report = self.flush_frame(GestureKind::Wheel);
        if pinch {
            report.merge(self.flush_frame(GestureKind::Pinch));
            self.finish(
                &mut report,
                GestureKind::Wheel,
                Outcome::Ignored(IgnoreReason::NotApplicable),
            );
            let outcome =
                PinchRecognizer.on_wheel(&mut self.context(GestureKind::Pinch), event, snapshot);
            self.finish(&mut report, GestureKind::Pinch, outcome);
        } else {
            let outcome =
                WheelRecognizer.on_wheel(&mut self.context(GestureKind::Wheel), event, snapshot);
            self.finish(&mut report, GestureKind::Wheel, outcome);
        }
        report
    }

    pub fn on_scroll(&mut self, event: &ScrollEvent) -> DispatchReport {
        let snapshot = self.pointers.scroll(event);
        let mut report = self.flush_frame(GestureKind::Scroll);
        let outcome =
            ScrollRecognizer.on_scroll(&mut self.context(GestureKind::Scroll), event, snapshot);
        self.finish(&mut report, GestureKind::Scroll, outcome);
        report
    }

    pub fn on_touch(&mut self, event: &TouchEvent) -> DispatchReport {
        let snapshot = self.pointers.touch(event);
        let mut report = self.flush_frame(GestureKind::Pinch);
        let cx = &mut self.context(GestureKind::Pinch);
        let outcome = match event.phase {
            TouchPhase::Start => PinchRecognizer.on_touch_start(cx, event, snapshot),
            TouchPhase::Move => PinchRecognizer.on_touch_move(cx, event, snapshot),
            TouchPhase::End | TouchPhase::Cancel => {
                PinchRecognizer.on_touch_end(cx, event, snapshot)
            }
        };
        self.finish(&mut report, GestureKind::Pinch, outcome);
        report
    }

    /// Runs every timer due at `now`, earliest first.
    pub fn advance_timers(&mut self, now: Instant) -> DispatchReport {
        let mut report = DispatchReport::new();
        while let Some((kind, timer)) = self.timers.take_due(now) {
            log::trace!("{kind}: timer {:?} fired", timer.action);
            report.merge(self.flush_frame(kind));
            let cx = &mut self.context(kind);
            let outcome = match (kind, timer.action) {
                (GestureKind::Drag, TimerAction::DelayedStart) => {
                    DragRecognizer.on_delay_elapsed(cx, timer.deadline)
                }
                (GestureKind::Move, TimerAction::DebounceEnd) => MoveRecognizer.end_debounced(cx),
                (GestureKind::Wheel, TimerAction::DebounceEnd) => {
                    WheelRecognizer.end_debounced(cx)
                }
                (GestureKind::Scroll, TimerAction::DebounceEnd) => {
                    ScrollRecognizer.end_debounced(cx)
                }
                (GestureKind::Pinch, TimerAction::DebounceEnd) => {
                    PinchRecognizer.end_debounced(cx)
                }
                (kind, action) => {
                    log::warn!("{kind}: unexpected timer action {:?}", action);
                    Outcome::Ignored(IgnoreReason::NotApplicable)
                }
            };
            self.finish(&mut report, kind, outcome);
        }
        report
    }

    /// Delivers the final flush of every session canceled since the last
    /// frame.
    pub fn on_animation_frame(&mut self, now: Instant) -> DispatchReport {
        let mut report = DispatchReport::new();
        for kind in self.frames.take() {
            let outcome = self.flush_canceled(kind, now);
            self.finish(&mut report, kind, outcome);
        }
        report
    }

    /// Cancels the running or pending session of `kind`, as the state's
    /// cancel token would.
    pub fn cancel(&mut self, kind: GestureKind) -> Outcome {
        let outcome = cancel_session(&mut self.context(kind));
        log_ignored(kind, outcome);
        outcome
    }

    /// Forgets everything about `kind`, offset included. Handlers are not
    /// notified.
    pub fn reset(&mut self, kind: GestureKind) {
        log::debug!("{kind}: reset");
        self.timers.clear(kind);
        self.listeners.detach(kind);
        self.frames.cancel(kind);
        self.states[kind] = GestureState::default();
        self.shared.set_active(kind, false);
    }

    /// Releases every timer, window listener and frame request, and drops
    /// live sessions without notifying handlers.
    pub fn clean(&mut self) {
        self.timers.clear_all();
        self.listeners.detach_all();
        self.frames.clear();
        self.pointers.clear();
        for (kind, state) in self.states.iter_mut() {
            state.engaged = false;
            state.pending = None;
            state.pointer_id = None;
            state.touch_ids = None;
            state.active = false;
            self.shared.set_active(kind, false);
        }
        self.shared.release();
    }

    fn flush_canceled(&mut self, kind: GestureKind, now: Instant) -> Outcome {
        let cx = &mut self.context(kind);
        if !cx.state.canceled {
            return Outcome::Ignored(IgnoreReason::Inactive);
        }
        cx.state.stamp(now);
        let force = cx.state.active;
        log::trace!("{kind}: flushing cancellation");
        fire_kind(cx, force)
    }

    /// A frame still queued for `kind` is delivered before new input reaches
    /// it, so cancellation is always heard before the next session.
    fn flush_frame(&mut self, kind: GestureKind) -> DispatchReport {
        let mut report = DispatchReport::new();
        if self.frames.cancel(kind) {
            let now = self.states[kind].time_stamp.unwrap_or_else(Instant::now);
            let outcome = self.flush_canceled(kind, now);
            self.finish(&mut report, kind, outcome);
        }
        report
    }

    fn finish(&mut self, report: &mut DispatchReport, kind: GestureKind, outcome: Outcome) {
        log_ignored(kind, outcome);
        report.push(kind, outcome);
        self.process_cancel_requests();
    }

    /// Acts on cancel tokens triggered during the last dispatch.
    fn process_cancel_requests(&mut self) {
        for kind in GestureKind::ALL {
            let state = &self.states[kind];
            if state.cancel.is_requested() && state.engaged && !state.canceled {
                cancel_session(&mut self.context(kind));
            }
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.clean();
    }
}

fn element_events(kind: GestureKind) -> &'static [ElementEvent] {
    match kind {
        GestureKind::Drag => DragRecognizer.bindings(),
        GestureKind::Move => MoveRecognizer.bindings(),
        GestureKind::Hover => HoverRecognizer.bindings(),
        GestureKind::Wheel => WheelRecognizer.bindings(),
        GestureKind::Scroll => ScrollRecognizer.bindings(),
        GestureKind::Pinch => PinchRecognizer.bindings(),
    }
}

fn fire_kind(cx: &mut GestureContext<'_>, force: bool) -> Outcome {
    match cx.kind {
        GestureKind::Drag => DragRecognizer.fire(cx, force),
        GestureKind::Move => MoveRecognizer.fire(cx, force),
        GestureKind::Hover => HoverRecognizer.fire(cx, force),
        GestureKind::Wheel => WheelRecognizer.fire(cx, force),
        GestureKind::Scroll => ScrollRecognizer.fire(cx, force),
        GestureKind::Pinch => PinchRecognizer.fire(cx, force),
    }
}

fn log_ignored(kind: GestureKind, outcome: Outcome) {
    if let Outcome::Ignored(reason) = outcome {
        log::trace!("{kind}: event ignored ({reason})");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
