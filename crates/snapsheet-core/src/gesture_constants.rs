//! Shared gesture constants for sheet dragging and snapping.
//!
//! All distances are logical pixels, all velocities are logical pixels per
//! millisecond. Hosts on very dense touch screens may want to scale the
//! velocity threshold through `GestureTracker::with_velocity_threshold`.

/// Height added on top of the bottom safe-area inset to form the default
/// "peek" snap point when the caller supplies no snap points.
pub const DEFAULT_PEEK_HEIGHT: f32 = 60.0;

/// Release velocity (px/ms) above which a flick moves one snap point past the
/// closest one.
///
/// Negative velocities point upward (sheet growing), positive downward.
pub const FLICK_VELOCITY_THRESHOLD: f32 = 0.5;

/// Asymptotic overscroll distance of the rubber band before the factor is
/// applied.
pub const RUBBER_BAND_MAX_OVERSCROLL: f32 = 50.0;

/// Distance over which the rubber band response decays by a factor of e.
pub const RUBBER_BAND_DECAY: f32 = 200.0;

/// Default rubber band factor. A softer 0.5 variant is also in use.
pub const DEFAULT_RUBBER_BAND_FACTOR: f32 = 1.0;
