//! Testing utilities and harness for Gestura

pub mod assertions;
pub mod rule;
pub mod window;

pub use assertions::{assert_approx_eq, assert_strictly_between, assert_vec_approx_eq};
pub use rule::*;
pub use window::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::rule::*;
    pub use crate::window::*;
    pub use gestura_core::prelude::*;
}
