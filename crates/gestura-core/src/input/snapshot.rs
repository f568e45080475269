use crate::collections::map::HashSet;

use super::types::{
    Modifiers, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerType,
    ScrollEvent, TouchEvent, WheelEvent,
};

/// Button, touch and modifier state at the time of one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub down: bool,
    pub buttons: PointerButtons,
    pub touches: u32,
    pub modifiers: Modifiers,
}

/// Tracks which touch contacts are on the surface between events.
///
/// Mouse and pen presses are read straight from the event's button set;
/// touch contacts have no button state of their own, so they are counted.
#[derive(Default)]
pub(crate) struct PointerTracker {
    contacts: HashSet<PointerId>,
}

impl PointerTracker {
    pub(crate) fn pointer(&mut self, event: &PointerEvent) -> InputSnapshot {
        if event.pointer_type == PointerType::Touch {
            match event.kind {
                PointerEventKind::Down => {
                    self.contacts.insert(event.id);
                }
                PointerEventKind::Up | PointerEventKind::Cancel | PointerEventKind::Leave => {
                    self.contacts.remove(&event.id);
                }
                PointerEventKind::Move | PointerEventKind::Enter => {}
            }
        }
        self.snapshot(event.buttons, event.modifiers)
    }

    pub(crate) fn touch(&mut self, event: &TouchEvent) -> InputSnapshot {
        self.contacts.clear();
        self.contacts.extend(event.touches.iter().map(|t| t.id));
        self.snapshot(PointerButtons::NONE, event.modifiers)
    }

    pub(crate) fn wheel(&self, event: &WheelEvent) -> InputSnapshot {
        self.snapshot(event.buttons, event.modifiers)
    }

    pub(crate) fn scroll(&self, event: &ScrollEvent) -> InputSnapshot {
        self.snapshot(PointerButtons::NONE, event.modifiers)
    }

    pub(crate) fn clear(&mut self) {
        self.contacts.clear();
    }

    fn snapshot(&self, buttons: PointerButtons, modifiers: Modifiers) -> InputSnapshot {
        let touches = self.contacts.len() as u32;
        InputSnapshot {
            down: !buttons.is_empty() || touches > 0,
            buttons,
            touches,
            modifiers,
        }
    }
}
