//! Settle animations for snapsheet
//!
//! Time-based height transitions with CSS-style easing curves. Nothing here
//! owns a clock: transitions are sampled at frame times supplied by the
//! host, which keeps them deterministic under test.

mod easing;
mod transition;

pub use easing::*;
pub use transition::*;

pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::transition::{AnimationSpec, HeightTransition};
}
