//! Snap point derivation and the current snap index.

use crate::gesture_constants::DEFAULT_PEEK_HEIGHT;
use smallvec::{smallvec, SmallVec};
use std::iter;

/// Ordered snap heights, smallest (closed) first and fully open last.
pub type SnapPointSet = SmallVec<[f32; 4]>;

/// Viewport measurements used to derive the bottom safe-area inset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Height of the whole window, including browser or system chrome
    /// overlaying the bottom edge.
    pub window_height: f32,
    /// Height of the laid-out document area.
    pub document_height: f32,
}

impl Viewport {
    pub const fn new(window_height: f32, document_height: f32) -> Self {
        Self {
            window_height,
            document_height,
        }
    }

    /// Bottom inset hidden behind chrome, never negative.
    pub fn safe_area_bottom(&self) -> f32 {
        (self.window_height - self.document_height).max(0.0)
    }
}

/// Single owner of the sheet's resting heights and of which one is current.
///
/// The snap set is re-derived whenever the content height or the caller's
/// base snap points change. Content is never clipped: a caller maximum below
/// the content height is replaced by the content height. With no caller
/// points the set is `[safe_area_bottom + 60, content_height]`.
///
/// Before the first content measurement the set is empty; every lookup
/// returns `None` until then.
#[derive(Clone, Debug, Default)]
pub struct SnapPointManager {
    base: Option<SnapPointSet>,
    viewport: Viewport,
    content_height: Option<f32>,
    snap_points: SnapPointSet,
    current: usize,
    revision: u64,
}

impl SnapPointManager {
    /// Creates a manager with optional caller-supplied snap points, in any
    /// order.
    pub fn new(base: Option<Vec<f32>>) -> Self {
        Self {
            base: base.map(SnapPointSet::from_vec),
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Records a new content measurement.
    ///
    /// Returns `false` without touching anything when the height is
    /// unchanged. Otherwise the set is re-derived and the index collapses to
    /// 0, unless the sheet was fully open (or resting exactly at the content
    /// height), in which case it stays pinned to the new last index.
    pub fn update_content_height(&mut self, height: f32) -> bool {
        if self.content_height == Some(height) {
            return false;
        }

        let was_open = !self.snap_points.is_empty() && self.current == self.snap_points.len() - 1;
        self.content_height = Some(height);
        self.recompute();

        let pinned = was_open || self.snap_points.get(self.current) == Some(&height);
        self.current = if pinned {
            self.snap_points.len().saturating_sub(1)
        } else {
            0
        };

        log::debug!(
            "content height {height}: snap points {:?}, current {}",
            self.snap_points.as_slice(),
            self.current
        );
        true
    }

    /// Replaces the caller-supplied snap points and collapses to index 0.
    pub fn set_base_snap_points(&mut self, base: Option<Vec<f32>>) {
        self.base = base.map(SnapPointSet::from_vec);
        if self.content_height.is_some() {
            self.recompute();
        }
        self.current = 0;
    }

    /// Records new viewport measurements.
    ///
    /// Only the default scheme depends on the viewport; when it is active the
    /// set is re-derived keeping the current index. Returns whether the set
    /// changed.
    pub fn update_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        let previous_inset = self.viewport.safe_area_bottom();
        self.viewport = viewport;

        if self.base.is_some()
            || self.content_height.is_none()
            || previous_inset == viewport.safe_area_bottom()
        {
            return false;
        }

        self.recompute();
        self.current = self.current.min(self.snap_points.len().saturating_sub(1));
        true
    }

    /// Current ordered snap heights.
    pub fn snap_points(&self) -> &[f32] {
        &self.snap_points
    }

    pub fn len(&self) -> usize {
        self.snap_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snap_points.is_empty()
    }

    pub fn snap_height(&self, index: usize) -> Option<f32> {
        self.snap_points.get(index).copied()
    }

    pub fn current_snap(&self) -> usize {
        self.current
    }

    pub fn current_height(&self) -> Option<f32> {
        self.snap_height(self.current)
    }

    /// Moves to `index` if it addresses a snap point. Out-of-range requests
    /// are ignored and return `false`.
    pub fn set_current_snap(&mut self, index: usize) -> bool {
        if index < self.snap_points.len() {
            self.current = index;
            true
        } else {
            log::trace!(
                "ignoring snap index {index}, {} snap points",
                self.snap_points.len()
            );
            false
        }
    }

    /// Last measured content height, 0 before the first measurement.
    pub fn content_height(&self) -> f32 {
        self.content_height.unwrap_or(0.0)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// `(lowest, highest)` snap height, or `None` while the set is empty.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        match (self.snap_points.first(), self.snap_points.last()) {
            (Some(lo), Some(hi)) => Some((*lo, *hi)),
            _ => None,
        }
    }

    /// Incremented every time the set is re-derived.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        let content = self.content_height();
        let mut points: SnapPointSet = match &self.base {
            Some(base) => {
                let max = base.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                if content > max {
                    base.iter()
                        .copied()
                        .filter(|point| *point != max)
                        .chain(iter::once(content))
                        .collect()
                } else {
                    base.clone()
                }
            }
            None => smallvec![self.viewport.safe_area_bottom() + DEFAULT_PEEK_HEIGHT, content],
        };
        points.sort_by(f32::total_cmp);
        self.snap_points = points;
        self.revision += 1;
    }
}

#[cfg(test)]
#[path = "tests/snap_points_tests.rs"]
mod tests;
