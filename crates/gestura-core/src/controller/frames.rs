//! Next-frame continuations.

use smallvec::SmallVec;

use crate::state::GestureKind;

/// Kinds waiting for a flush on the next animation frame. Each kind is
/// queued at most once.
#[derive(Debug, Default)]
pub(crate) struct FrameQueue {
    pending: SmallVec<[GestureKind; 2]>,
}

impl FrameQueue {
    /// Returns `false` when `kind` was already queued.
    pub(crate) fn request(&mut self, kind: GestureKind) -> bool {
        if self.contains(kind) {
            return false;
        }
        self.pending.push(kind);
        true
    }

    pub(crate) fn cancel(&mut self, kind: GestureKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != kind);
        before != self.pending.len()
    }

    pub(crate) fn contains(&self, kind: GestureKind) -> bool {
        self.pending.contains(&kind)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn take(&mut self) -> SmallVec<[GestureKind; 2]> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}
