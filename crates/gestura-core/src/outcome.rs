//! What a recognizer did with an input.
//!
//! Recognizers never fail: malformed or stale input is disregarded and the
//! reason is reported instead, so hosts and tests can tell the cases apart.

use std::fmt;

use smallvec::SmallVec;

use crate::state::GestureKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The handler was called.
    Fired,
    /// State changed without calling the handler.
    Updated,
    /// The input was disregarded.
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn fired(self) -> bool {
        self == Outcome::Fired
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No handler bound or the kind is disabled in config.
    Disabled,
    /// A session of this kind is already running.
    AlreadyActive,
    /// Sample from a pointer other than the one that started the session.
    StalePointer,
    /// A delayed start has not fired yet.
    DelayPending,
    /// No session to update or end.
    Inactive,
    /// The session was canceled.
    Canceled,
    /// A two-finger gesture needs two contacts.
    NotEnoughTouches,
    /// The event does not concern this kind.
    NotApplicable,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Disabled => write!(f, "gesture disabled"),
            IgnoreReason::AlreadyActive => write!(f, "session already active"),
            IgnoreReason::StalePointer => write!(f, "pointer does not own the session"),
            IgnoreReason::DelayPending => write!(f, "start delay pending"),
            IgnoreReason::Inactive => write!(f, "no active session"),
            IgnoreReason::Canceled => write!(f, "session canceled"),
            IgnoreReason::NotEnoughTouches => write!(f, "not enough touches"),
            IgnoreReason::NotApplicable => write!(f, "event not applicable"),
        }
    }
}

/// Outcomes of every recognizer one raw event reached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchReport {
    entries: SmallVec<[(GestureKind, Outcome); 2]>,
}

impl DispatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, kind: GestureKind, outcome: Outcome) {
        self.entries.push((kind, outcome));
    }

    /// Appends the outcomes of another dispatch of the same raw event.
    pub fn merge(&mut self, other: DispatchReport) {
        self.entries.extend(other.entries);
    }

    pub fn outcome(&self, kind: GestureKind) -> Option<Outcome> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| *outcome)
    }

    pub fn fired(&self, kind: GestureKind) -> bool {
        self.entries
            .iter()
            .any(|(k, outcome)| *k == kind && outcome.fired())
    }

    pub fn entries(&self) -> &[(GestureKind, Outcome)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<(GestureKind, Outcome)> for DispatchReport {
    fn from((kind, outcome): (GestureKind, Outcome)) -> Self {
        let mut report = DispatchReport::new();
        report.push(kind, outcome);
        report
    }
}
