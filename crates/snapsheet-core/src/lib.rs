//! Snap point and gesture tracking core for snapsheet
//!
//! This crate holds the parts of the bottom sheet that carry real logic:
//! deriving snap heights from content and viewport measurements, turning a
//! pointer drag into an elastic height, and resolving a release into a
//! discrete snap index. It has no knowledge of any rendering surface.

mod clock;
mod elastic;
mod gesture;
pub mod gesture_constants;
mod input;
mod resolve;
mod snap_points;

pub use clock::*;
pub use elastic::*;
pub use gesture::*;
pub use input::*;
pub use resolve::*;
pub use snap_points::*;

pub mod prelude {
    pub use crate::elastic::RubberBand;
    pub use crate::gesture::{DragSession, DragStart, GestureTracker};
    pub use crate::input::{ExclusionZone, PointerEvent, PointerEventKind, TargetId};
    pub use crate::snap_points::{SnapPointManager, Viewport};
}
