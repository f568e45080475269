//! At most one pending timer per gesture kind.
//!
//! Timers are deadlines, not callbacks into the host: the host asks for
//! [`TimerTable::next_deadline`] (for `WaitUntil` style scheduling) and the
//! controller drains due timers when the host advances time.

use web_time::Instant;

use crate::state::{GestureKind, GestureMap};

/// What to do when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Start a drag whose start was delayed.
    DelayedStart,
    /// End a debounced session after its quiet period.
    DebounceEnd,
}

/// Handle of a scheduled timer. Replacing or clearing the timer invalidates
/// the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub deadline: Instant,
    pub action: TimerAction,
}

#[derive(Debug, Default)]
pub(crate) struct TimerTable {
    slots: GestureMap<Option<Timer>>,
    next_id: u64,
}

impl TimerTable {
    /// Schedules `action` for `kind`, replacing any pending timer of that kind.
    pub(crate) fn set(
        &mut self,
        kind: GestureKind,
        action: TimerAction,
        deadline: Instant,
    ) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        if let Some(previous) = self.slots[kind].replace(Timer {
            id,
            deadline,
            action,
        }) {
            log::trace!("{kind}: replacing timer {:?}", previous.action);
        }
        id
    }

    /// Clears the pending timer of `kind`. Safe with nothing pending.
    pub(crate) fn clear(&mut self, kind: GestureKind) -> Option<Timer> {
        self.slots[kind].take()
    }

    pub(crate) fn clear_all(&mut self) {
        for (_, slot) in self.slots.iter_mut() {
            *slot = None;
        }
    }

    pub(crate) fn get(&self, kind: GestureKind) -> Option<&Timer> {
        self.slots[kind].as_ref()
    }

    /// Earliest pending deadline across all kinds.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .iter()
            .filter_map(|(_, slot)| slot.map(|timer| timer.deadline))
            .min()
    }

    /// Removes and returns the earliest timer due at `now`.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<(GestureKind, Timer)> {
        let (kind, _) = self
            .slots
            .iter()
            .filter_map(|(kind, slot)| slot.map(|timer| (kind, timer.deadline)))
            .filter(|(_, deadline)| *deadline <= now)
            .min_by_key(|(_, deadline)| *deadline)?;
        self.slots[kind].take().map(|timer| (kind, timer))
    }
}
