//! Draggable bottom sheet controller with snap points
//!
//! [`BottomSheet`] ties the snap point and gesture core to a host UI layer
//! through the [`SheetHost`] trait: the host forwards measurements and
//! pointer events, the sheet answers with heights to render and fires
//! open/close/snap callbacks when it settles.

mod backdrop;
mod callbacks;
mod color;
mod config;
mod error;
mod host;
mod sheet;

pub use backdrop::*;
pub use callbacks::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use sheet::*;

pub use snapsheet_animation::{AnimationSpec, Easing};
pub use snapsheet_core::{
    ExcludedTargets, ExclusionZone, MonotonicClock, PointerEvent, PointerEventKind, PointerType,
    TargetId, Viewport,
};

pub mod prelude {
    pub use crate::backdrop::BackdropFill;
    pub use crate::callbacks::SheetCallbacks;
    pub use crate::config::SheetConfig;
    pub use crate::host::SheetHost;
    pub use crate::sheet::BottomSheet;
    pub use snapsheet_core::{PointerEvent, TargetId, Viewport};
}
