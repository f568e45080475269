//! Pure math for gesture recognition: vectors, bounds, rubberbanding and kinematics.
//!
//! Nothing in this crate holds state. Recognizers call into it once per sample.

pub mod bounds;
pub mod kinematics;
pub mod rubberband;
pub mod vector;

pub use bounds::*;
pub use kinematics::*;
pub use rubberband::*;
pub use vector::*;
