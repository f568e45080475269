//! A [`WindowBinding`] that records every attach and detach.

use std::cell::RefCell;
use std::rc::Rc;

use gestura_core::{EventOptions, GestureKind, WindowBinding, WindowEventType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerCall {
    Attach(GestureKind, WindowEventType, EventOptions),
    Detach(GestureKind, WindowEventType, EventOptions),
}

/// Stand-in for the host window. Clones share the same call log, so a test
/// can keep one while the controller owns the other.
#[derive(Clone, Debug, Default)]
pub struct RecordingWindow {
    calls: Rc<RefCell<Vec<ListenerCall>>>,
}

impl RecordingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ListenerCall> {
        self.calls.borrow().clone()
    }

    pub fn attach_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ListenerCall::Attach(..)))
            .count()
    }

    pub fn detach_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ListenerCall::Detach(..)))
            .count()
    }

    /// Listeners of `kind` attached and not yet detached, in attach order.
    pub fn live(&self, kind: GestureKind) -> Vec<WindowEventType> {
        let mut live = Vec::new();
        for call in self.calls.borrow().iter() {
            match *call {
                ListenerCall::Attach(k, event, _) if k == kind => live.push(event),
                ListenerCall::Detach(k, event, _) if k == kind => {
                    live.retain(|attached| *attached != event)
                }
                _ => {}
            }
        }
        live
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl WindowBinding for RecordingWindow {
    fn attach(&mut self, kind: GestureKind, event: WindowEventType, options: EventOptions) {
        self.calls
            .borrow_mut()
            .push(ListenerCall::Attach(kind, event, options));
    }

    fn detach(&mut self, kind: GestureKind, event: WindowEventType, options: EventOptions) {
        self.calls
            .borrow_mut()
            .push(ListenerCall::Detach(kind, event, options));
    }
}
