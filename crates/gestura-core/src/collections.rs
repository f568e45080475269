#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashSet;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashSet as HashSet;
}
