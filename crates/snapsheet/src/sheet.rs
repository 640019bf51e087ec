//! The bottom sheet controller.

use crate::backdrop::{backdrop_height, BackdropFill};
use crate::callbacks::SheetCallbacks;
use crate::config::{validate_snap_points, SheetConfig};
use crate::error::SheetConfigError;
use crate::host::SheetHost;
use snapsheet_animation::{AnimationSpec, HeightTransition};
use snapsheet_core::{
    DragStart, GestureTracker, PointerEvent, PointerEventKind, RubberBand, SnapPointManager,
    Viewport,
};

/// A draggable sheet anchored to the bottom of the viewport.
///
/// All input is pushed in by the host with explicit millisecond timestamps:
/// content and viewport measurements, pointer events and animation frames.
/// While a drag is active heights are applied immediately; once released the
/// sheet settles with an eased transition driven by [`BottomSheet::tick`].
pub struct BottomSheet<H: SheetHost> {
    host: H,
    snaps: SnapPointManager,
    tracker: GestureTracker,
    callbacks: SheetCallbacks,
    backdrop: BackdropFill,
    release_settle: AnimationSpec,
    snap_settle: AnimationSpec,
    /// Last height handed to the host.
    sheet_height: Option<f32>,
    transition: Option<HeightTransition>,
}

impl<H: SheetHost> BottomSheet<H> {
    /// Validates `config`, attaches the host, records the first content
    /// measurement and settles at snap index 0 without animating.
    ///
    /// Settling at 0 fires `on_snap(0)` and `on_close` right away.
    pub fn mount(
        config: SheetConfig,
        callbacks: SheetCallbacks,
        mut host: H,
        content_height: f32,
        now_ms: u64,
    ) -> Result<Self, SheetConfigError> {
        config.validate()?;

        let snaps = SnapPointManager::new(config.snap_points).with_viewport(config.viewport);
        let tracker = GestureTracker::new()
            .with_rubber_band(RubberBand::new(config.rubber_band_factor))
            .with_velocity_threshold(config.velocity_threshold)
            .with_exclusion(config.excluded_region);

        host.attach(&config.backdrop);

        let mut sheet = Self {
            host,
            snaps,
            tracker,
            callbacks,
            backdrop: config.backdrop,
            release_settle: config.release_settle,
            snap_settle: config.snap_settle,
            sheet_height: None,
            transition: None,
        };
        sheet.snaps.update_content_height(content_height);
        sheet.update_backdrop();
        sheet.settle(0, None, now_ms);

        log::debug!(
            "sheet mounted with snap points {:?}",
            sheet.snaps.snap_points()
        );
        Ok(sheet)
    }

    /// Routes a pointer event. Returns `true` when the sheet claimed the
    /// event, in which case the host should suppress its default handling
    /// (text selection, page scroll).
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let now_ms = event.uptime_ms;
        let claimed = match event.kind {
            PointerEventKind::Down => {
                let start_height = self.displayed_height(now_ms);
                match self
                    .tracker
                    .on_interaction_start(event.y, event.target, start_height, now_ms)
                {
                    DragStart::Began => {
                        self.transition = None;
                        true
                    }
                    DragStart::Excluded => false,
                }
            }
            PointerEventKind::Move => {
                match self.tracker.on_interaction_move(event.y, now_ms, &self.snaps) {
                    Some(height) => {
                        self.apply_height(height);
                        true
                    }
                    None => false,
                }
            }
            PointerEventKind::Up => {
                let target = self.tracker.on_interaction_end(&self.snaps);
                self.settle_after_drag(target, now_ms)
            }
            PointerEventKind::Cancel => {
                let target = self.tracker.cancel(&self.snaps);
                self.settle_after_drag(target, now_ms)
            }
        };

        if claimed {
            event.consume();
        }
        claimed
    }

    /// Aborts an active drag whose terminal event will never arrive and
    /// settles from the last dragged height. Returns whether a drag was
    /// active.
    pub fn cancel_drag(&mut self, now_ms: u64) -> bool {
        let target = self.tracker.cancel(&self.snaps);
        self.settle_after_drag(target, now_ms)
    }

    /// Records a new content measurement.
    ///
    /// When the snap set changes and no drag is active the sheet moves to the
    /// (possibly reset) current snap height; no callbacks fire for reflows.
    pub fn update_content_height(&mut self, height: f32, now_ms: u64) -> bool {
        if !self.snaps.update_content_height(height) {
            return false;
        }
        if !self.tracker.is_dragging() {
            if let Some(target) = self.snaps.current_height() {
                self.animate_to(target, self.snap_settle, now_ms);
            }
        }
        self.update_backdrop();
        true
    }

    /// Records new viewport measurements and re-settles at the current snap
    /// index, firing callbacks as a settle does.
    pub fn update_viewport(&mut self, viewport: Viewport, now_ms: u64) {
        self.snaps.update_viewport(viewport);
        if !self.tracker.is_dragging() {
            self.settle(self.snaps.current_snap(), Some(self.snap_settle), now_ms);
        }
    }

    /// Replaces the caller-supplied snap points and settles at index 0.
    pub fn set_snap_points(
        &mut self,
        snap_points: Option<Vec<f32>>,
        now_ms: u64,
    ) -> Result<(), SheetConfigError> {
        if let Some(points) = &snap_points {
            validate_snap_points(points)?;
        }
        self.snaps.set_base_snap_points(snap_points);
        if !self.tracker.is_dragging() {
            self.settle(0, Some(self.snap_settle), now_ms);
        }
        Ok(())
    }

    /// Animates to `index`. Out-of-range indices and requests arriving while
    /// a drag is active are ignored and return `false`.
    pub fn snap_to(&mut self, index: usize, now_ms: u64) -> bool {
        if index >= self.snaps.len() {
            return false;
        }
        if self.tracker.is_dragging() {
            log::debug!("ignoring snap to {index} during a drag");
            return false;
        }
        self.settle(index, Some(self.snap_settle), now_ms);
        true
    }

    /// Advances the settle animation to frame time `now_ms`. Returns whether
    /// another frame is needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        let finished = transition.is_finished(now_ms);
        self.apply_height(transition.sample(now_ms));
        if finished {
            self.transition = None;
            false
        } else {
            self.host.request_frame();
            true
        }
    }

    /// Detaches from the host and hands it back.
    pub fn destroy(self) -> H {
        let BottomSheet {
            mut host, tracker, ..
        } = self;
        if tracker.is_dragging() {
            log::debug!("sheet destroyed mid-drag");
        }
        host.detach();
        host
    }

    pub fn snap_points(&self) -> &[f32] {
        self.snaps.snap_points()
    }

    pub fn current_snap(&self) -> usize {
        self.snaps.current_snap()
    }

    pub fn content_height(&self) -> f32 {
        self.snaps.content_height()
    }

    /// Last height handed to the host.
    pub fn sheet_height(&self) -> Option<f32> {
        self.sheet_height
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn backdrop(&self) -> &BackdropFill {
        &self.backdrop
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Height the sheet shows at `now_ms`, including an in-flight settle.
    fn displayed_height(&self, now_ms: u64) -> f32 {
        match &self.transition {
            Some(transition) => transition.sample(now_ms),
            None => self.sheet_height.or_else(|| self.snaps.snap_height(0)).unwrap_or(0.0),
        }
    }

    fn settle_after_drag(&mut self, target: Option<usize>, now_ms: u64) -> bool {
        match target {
            Some(index) => {
                self.settle(index, Some(self.release_settle), now_ms);
                true
            }
            None => false,
        }
    }

    /// Makes `index` current, moves there and fires the settle callbacks.
    fn settle(&mut self, index: usize, animation: Option<AnimationSpec>, now_ms: u64) {
        self.snaps.set_current_snap(index);
        let Some(target) = self.snaps.snap_height(index) else {
            return;
        };

        match animation {
            Some(spec) => self.animate_to(target, spec, now_ms),
            None => {
                self.transition = None;
                self.apply_height(target);
            }
        }

        log::debug!("settled at snap {index} ({target}px)");
        self.callbacks.notify_settled(index, self.snaps.len());
    }

    fn animate_to(&mut self, target: f32, spec: AnimationSpec, now_ms: u64) {
        match self.transition.as_mut() {
            Some(transition) => transition.retarget(now_ms, target, spec),
            None => {
                let from = self.displayed_height(now_ms);
                self.transition = Some(HeightTransition::new(from, target, now_ms, spec));
            }
        }
        self.host.request_frame();
    }

    fn apply_height(&mut self, height: f32) {
        self.sheet_height = Some(height);
        self.host.set_sheet_height(height);
        self.update_backdrop();
    }

    fn update_backdrop(&mut self) {
        let sheet = self
            .sheet_height
            .or_else(|| self.snaps.snap_height(0))
            .unwrap_or(0.0);
        self.host
            .set_backdrop_height(backdrop_height(sheet, self.snaps.content_height()));
    }
}

impl<H: SheetHost + std::fmt::Debug> std::fmt::Debug for BottomSheet<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomSheet")
            .field("host", &self.host)
            .field("snaps", &self.snaps)
            .field("tracker", &self.tracker)
            .field("sheet_height", &self.sheet_height)
            .field("transition", &self.transition)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
