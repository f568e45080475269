//! Gesture options and their resolution into canonical config.

mod options;
mod resolve;

pub use options::*;
pub use resolve::{BoundsSource, ControllerConfig, GestureConfig, InitialSource};
