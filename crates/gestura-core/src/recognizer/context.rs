use web_time::{Duration, Instant};

use crate::config::{EventOptions, GestureConfig};
use crate::controller::frames::FrameQueue;
use crate::controller::listeners::{WindowEventType, WindowListenerRegistry};
use crate::controller::timers::{TimerAction, TimerTable};
use crate::controller::GestureHandler;
use crate::event::{GestureEvent, StateValues};
use crate::input::InputSnapshot;
use crate::outcome::Outcome;
use crate::state::{GestureKind, GestureState, Memo, SharedState};

/// What one recognizer may touch while handling an input: its own config,
/// state and handler, the shared state, and the controller's side-tables
/// for its own kind only.
pub(crate) struct GestureContext<'a> {
    pub(crate) kind: GestureKind,
    pub(crate) config: &'a GestureConfig,
    pub(crate) debounce: Duration,
    pub(crate) event_options: EventOptions,
    pub(crate) shared: &'a mut SharedState,
    pub(crate) state: &'a mut GestureState,
    pub(crate) handler: Option<&'a mut GestureHandler>,
    pub(crate) args: Option<&'a Memo>,
    pub(crate) timers: &'a mut TimerTable,
    pub(crate) listeners: &'a mut WindowListenerRegistry,
    pub(crate) frames: &'a mut FrameQueue,
}

impl GestureContext<'_> {
    /// A kind takes new sessions only when enabled and bound to a handler.
    pub(crate) fn enabled(&self) -> bool {
        self.config.enabled && self.handler.is_some()
    }

    /// Generic payload step: the only place shared input state is written.
    pub(crate) fn apply_payload(&mut self, snapshot: InputSnapshot) {
        self.shared.apply(snapshot);
    }

    /// Schedules `action` after `delay`. A deadline past the end of the clock
    /// is never due, so no timer is kept for it.
    pub(crate) fn set_timer(&mut self, action: TimerAction, delay: Duration, now: Instant) {
        match now.checked_add(delay) {
            Some(deadline) => {
                self.timers.set(self.kind, action, deadline);
            }
            None => {
                log::debug!("{}: {:?} after {:?} is never due", self.kind, action, delay);
                self.clear_timer();
            }
        }
    }

    pub(crate) fn clear_timer(&mut self) {
        self.timers.clear(self.kind);
    }

    pub(crate) fn attach_window(&mut self, events: &[WindowEventType]) {
        self.listeners.attach(self.kind, events, self.event_options);
    }

    pub(crate) fn detach_window(&mut self) {
        self.listeners.detach(self.kind);
    }

    /// Releases the kind's timer and window listeners.
    pub(crate) fn clean(&mut self) {
        self.clear_timer();
        self.detach_window();
    }

    pub(crate) fn request_frame(&mut self) {
        if self.frames.request(self.kind) {
            log::trace!("{}: frame requested", self.kind);
        }
    }

    /// Firing contract.
    ///
    /// Blocked states never reach the handler, and end the session unless the
    /// kind is debounced. Without `force`, states with no intentional axis
    /// don't either. Otherwise `first`, `last` and `active` are settled from
    /// the engaged flag, the shared activity flag follows, and the handler's
    /// memo replaces the stored one.
    pub(crate) fn flush(&mut self, values: StateValues, force: bool) -> Outcome {
        let kind = self.kind;
        if self.state.blocked {
            if !kind.is_debounced() && self.state.engaged {
                log::debug!("{kind}: blocked, ending session");
                self.state.engaged = false;
                self.shared.release();
                self.clean();
            }
            return Outcome::Updated;
        }
        if !force && !self.state.is_intentional() {
            return Outcome::Updated;
        }

        let was_active = self.state.active;
        let active = self.state.engaged;
        self.state.first = active && !was_active;
        self.state.last = was_active && !active;
        self.state.active = active;
        self.shared.set_active(kind, active);

        let Some(handler) = self.handler.as_deref_mut() else {
            return Outcome::Updated;
        };
        let event = GestureEvent {
            kind,
            shared: &*self.shared,
            state: &*self.state,
            values,
            args: self.args,
        };
        let memo = handler(&event);
        if memo.is_some() {
            self.state.memo = memo;
        }
        Outcome::Fired
    }
}
