//! Drag tracking: pointer movement to elastic height, release to snap index.

use crate::elastic::RubberBand;
use crate::gesture_constants::FLICK_VELOCITY_THRESHOLD;
use crate::input::{ExclusionZone, TargetId};
use crate::resolve::resolve_snap_index;
use crate::snap_points::SnapPointManager;
use std::rc::Rc;

/// State of one drag interaction, from pointer down to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start_y: f32,
    start_height: f32,
    last_y: f32,
    last_time_ms: u64,
    /// Instantaneous velocity in px/ms, positive when moving down.
    velocity: f32,
    /// Last height handed to the host.
    height: f32,
}

impl DragSession {
    fn new(pointer_y: f32, start_height: f32, now_ms: u64) -> Self {
        Self {
            start_y: pointer_y,
            start_height,
            last_y: pointer_y,
            last_time_ms: now_ms,
            velocity: 0.0,
            height: start_height,
        }
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    pub fn start_height(&self) -> f32 {
        self.start_height
    }

    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    pub fn last_time_ms(&self) -> u64 {
        self.last_time_ms
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Outcome of a pointer down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragStart {
    /// A drag session is now active; height transitions should be suspended.
    Began,
    /// The pointer landed in the excluded region; the rest of this
    /// interaction is ignored.
    Excluded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TrackerState {
    Idle,
    Inert,
    Dragging(DragSession),
}

/// Converts a drag into live heights and, on release, a snap index.
///
/// `Idle -> Dragging -> Idle`. Snap bounds are read from the
/// [`SnapPointManager`] on every move, so content reflows during a drag take
/// effect immediately. The tracker never writes to the manager; the caller
/// applies the returned index.
pub struct GestureTracker {
    state: TrackerState,
    exclusion: Option<Rc<dyn ExclusionZone>>,
    rubber_band: RubberBand,
    velocity_threshold: f32,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
            exclusion: None,
            rubber_band: RubberBand::default(),
            velocity_threshold: FLICK_VELOCITY_THRESHOLD,
        }
    }

    pub fn with_rubber_band(mut self, rubber_band: RubberBand) -> Self {
        self.rubber_band = rubber_band;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_exclusion(mut self, exclusion: Option<Rc<dyn ExclusionZone>>) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn rubber_band(&self) -> RubberBand {
        self.rubber_band
    }

    pub fn velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackerState::Dragging(_))
    }

    /// The active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            TrackerState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Velocity of the active session in px/ms, 0 when idle.
    pub fn velocity(&self) -> f32 {
        self.session().map_or(0.0, DragSession::velocity)
    }

    fn is_excluded(&self, target: Option<TargetId>) -> bool {
        match (&self.exclusion, target) {
            (Some(zone), Some(target)) => zone.contains(target),
            _ => false,
        }
    }

    /// Pointer down at `pointer_y` while the sheet is `start_height` tall.
    ///
    /// A start arriving while a session is still active means the previous
    /// interaction never delivered its end; that session is dropped.
    pub fn on_interaction_start(
        &mut self,
        pointer_y: f32,
        target: Option<TargetId>,
        start_height: f32,
        now_ms: u64,
    ) -> DragStart {
        if let TrackerState::Dragging(stale) = self.state {
            log::warn!(
                "drag started while a session was active (start y {}); dropping it",
                stale.start_y
            );
        }

        if self.is_excluded(target) {
            log::trace!("pointer down on excluded target {target:?}");
            self.state = TrackerState::Inert;
            return DragStart::Excluded;
        }

        log::trace!("drag began at y {pointer_y}, height {start_height}");
        self.state = TrackerState::Dragging(DragSession::new(pointer_y, start_height, now_ms));
        DragStart::Began
    }

    /// Pointer moved to `pointer_y` at `now_ms`. Returns the elastic height
    /// to render, or `None` when no drag is active.
    pub fn on_interaction_move(
        &mut self,
        pointer_y: f32,
        now_ms: u64,
        snaps: &SnapPointManager,
    ) -> Option<f32> {
        let rubber_band = self.rubber_band;
        let TrackerState::Dragging(session) = &mut self.state else {
            return None;
        };

        let delta_y = pointer_y - session.last_y;
        let delta_time = now_ms.saturating_sub(session.last_time_ms);
        if delta_time > 0 {
            session.velocity = delta_y / delta_time as f32;
        }

        let raw = session.start_height - (pointer_y - session.start_y);
        session.height = rubber_band.clamp(raw, snaps.bounds());
        session.last_y = pointer_y;
        session.last_time_ms = now_ms;

        Some(session.height)
    }

    /// Pointer released. Returns the snap index to settle at, or `None` when
    /// no drag was active (or there is nothing to snap to).
    pub fn on_interaction_end(&mut self, snaps: &SnapPointManager) -> Option<usize> {
        self.finish(snaps, "released")
    }

    /// Aborts the active drag (pointer capture lost, gesture stolen) and
    /// resolves from the last known height, returning the tracker to Idle.
    pub fn cancel(&mut self, snaps: &SnapPointManager) -> Option<usize> {
        self.finish(snaps, "cancelled")
    }

    fn finish(&mut self, snaps: &SnapPointManager, how: &str) -> Option<usize> {
        let TrackerState::Dragging(session) = std::mem::replace(&mut self.state, TrackerState::Idle)
        else {
            return None;
        };

        let target = resolve_snap_index(
            snaps.snap_points(),
            session.height,
            session.velocity,
            self.velocity_threshold,
        );
        log::debug!(
            "drag {how} at height {} with velocity {} px/ms -> snap {target:?}",
            session.height,
            session.velocity
        );
        target
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GestureTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureTracker")
            .field("state", &self.state)
            .field("has_exclusion", &self.exclusion.is_some())
            .field("rubber_band", &self.rubber_band)
            .field("velocity_threshold", &self.velocity_threshold)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
