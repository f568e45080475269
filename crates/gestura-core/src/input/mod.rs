//! Raw input events delivered by the host and the generic payload extracted
//! from them.

mod snapshot;
mod types;

pub use snapshot::InputSnapshot;
pub(crate) use snapshot::PointerTracker;
pub use types::*;
