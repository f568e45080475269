//! Window-scoped listeners a drag keeps while its pointer may leave the
//! element.
//!
//! Only the controller attaches or detaches listeners, and only through the
//! registry, which never registers the same listener twice and never detaches
//! one that is not attached.

use smallvec::SmallVec;

use crate::config::EventOptions;
use crate::state::{GestureKind, GestureMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEventType {
    PointerMove,
    PointerUp,
    PointerCancel,
}

impl WindowEventType {
    pub const POINTER: [WindowEventType; 3] = [
        WindowEventType::PointerMove,
        WindowEventType::PointerUp,
        WindowEventType::PointerCancel,
    ];
}

/// Host side of window listeners.
///
/// The host owns the window and the native listeners; the controller tells it
/// when a listener for a gesture kind has to exist. Matching window events are
/// fed back through the controller's `on_window_*` entry points.
pub trait WindowBinding {
    fn attach(&mut self, kind: GestureKind, event: WindowEventType, options: EventOptions);

    fn detach(&mut self, kind: GestureKind, event: WindowEventType, options: EventOptions);
}

/// Listeners attached for one kind, each with the options it was attached
/// with. Detaching reuses those options so the host can match the pair.
#[derive(Debug, Default)]
struct AttachedListeners {
    events: SmallVec<[WindowEventType; 3]>,
    options: SmallVec<[EventOptions; 3]>,
}

#[derive(Default)]
pub(crate) struct WindowListenerRegistry {
    attached: GestureMap<AttachedListeners>,
    binding: Option<Box<dyn WindowBinding>>,
}

impl WindowListenerRegistry {
    pub(crate) fn new(binding: Option<Box<dyn WindowBinding>>) -> Self {
        Self {
            attached: GestureMap::default(),
            binding,
        }
    }

    pub(crate) fn attach(
        &mut self,
        kind: GestureKind,
        events: &[WindowEventType],
        options: EventOptions,
    ) {
        for &event in events {
            let attached = &mut self.attached[kind];
            if attached.events.contains(&event) {
                continue;
            }
            attached.events.push(event);
            attached.options.push(options);
            log::trace!("{kind}: attaching window {:?}", event);
            if let Some(binding) = self.binding.as_mut() {
                binding.attach(kind, event, options);
            }
        }
    }

    pub(crate) fn detach(&mut self, kind: GestureKind) {
        let attached = std::mem::take(&mut self.attached[kind]);
        for (event, options) in attached.events.into_iter().zip(attached.options) {
            log::trace!("{kind}: detaching window {:?}", event);
            if let Some(binding) = self.binding.as_mut() {
                binding.detach(kind, event, options);
            }
        }
    }

    pub(crate) fn detach_all(&mut self) {
        for kind in GestureKind::ALL {
            self.detach(kind);
        }
    }

    pub(crate) fn is_attached(&self, kind: GestureKind, event: WindowEventType) -> bool {
        self.attached[kind].events.contains(&event)
    }

    pub(crate) fn attached(&self, kind: GestureKind) -> &[WindowEventType] {
        &self.attached[kind].events
    }
}
