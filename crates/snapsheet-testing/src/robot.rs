//! Scripted pointer input against a mounted sheet.

use crate::recording::{CallbackRecorder, RecordingHost};
use snapsheet::{BottomSheet, SheetConfig, SheetConfigError, SheetHost};
use snapsheet_core::{PointerEvent, TargetId};

/// Frame interval used when pumping settle animations (~60 FPS).
pub const FRAME_MS: u64 = 16;

/// Upper bound on frames pumped by [`SheetRobot::settle`].
const MAX_SETTLE_FRAMES: usize = 1_000;

/// Drives a [`BottomSheet`] the way a finger would, on a virtual clock.
///
/// Every action advances the clock by the given number of milliseconds
/// before the event is delivered, so velocities are fully determined by the
/// script.
pub struct SheetRobot<H: SheetHost = RecordingHost> {
    sheet: BottomSheet<H>,
    now_ms: u64,
    pointer_y: f32,
}

impl SheetRobot<RecordingHost> {
    /// Mounts a sheet on a [`RecordingHost`] at time 0 with callbacks routed
    /// into `recorder`.
    pub fn mount(
        config: SheetConfig,
        recorder: &CallbackRecorder,
        content_height: f32,
    ) -> Result<Self, SheetConfigError> {
        let sheet = BottomSheet::mount(
            config,
            recorder.callbacks(),
            RecordingHost::new(),
            content_height,
            0,
        )?;
        Ok(Self::new(sheet, 0))
    }
}

impl<H: SheetHost> SheetRobot<H> {
    pub fn new(sheet: BottomSheet<H>, now_ms: u64) -> Self {
        Self {
            sheet,
            now_ms,
            pointer_y: 0.0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn press(&mut self, y: f32) -> bool {
        self.pointer_y = y;
        self.sheet.handle_pointer(&PointerEvent::down(y, self.now_ms))
    }

    pub fn press_on(&mut self, y: f32, target: TargetId) -> bool {
        self.pointer_y = y;
        self.sheet
            .handle_pointer(&PointerEvent::down(y, self.now_ms).with_target(target))
    }

    pub fn move_to(&mut self, y: f32, after_ms: u64) -> bool {
        self.advance(after_ms);
        self.pointer_y = y;
        self.sheet.handle_pointer(&PointerEvent::moved(y, self.now_ms))
    }

    pub fn release(&mut self, after_ms: u64) -> bool {
        self.advance(after_ms);
        self.sheet
            .handle_pointer(&PointerEvent::up(self.pointer_y, self.now_ms))
    }

    pub fn cancel(&mut self, after_ms: u64) -> bool {
        self.advance(after_ms);
        self.sheet
            .handle_pointer(&PointerEvent::cancel(self.pointer_y, self.now_ms))
    }

    /// Presses at `from`, moves to `to` in `steps` evenly spaced moves over
    /// `duration_ms`, then releases without pausing.
    pub fn drag(&mut self, from: f32, to: f32, duration_ms: u64, steps: u32) -> bool {
        self.press(from);
        let steps = steps.max(1);
        let step_ms = duration_ms / u64::from(steps);
        for step in 1..=steps {
            let y = from + (to - from) * step as f32 / steps as f32;
            self.move_to(y, step_ms);
        }
        self.release(0)
    }

    /// Pumps animation frames until the sheet stops animating. Returns the
    /// number of frames delivered.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.sheet.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.advance(FRAME_MS);
            self.sheet.tick(self.now_ms);
            frames += 1;
        }
        log::trace!("settled after {frames} frames at {} ms", self.now_ms);
        frames
    }

    pub fn sheet(&self) -> &BottomSheet<H> {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BottomSheet<H> {
        &mut self.sheet
    }

    pub fn into_sheet(self) -> BottomSheet<H> {
        self.sheet
    }
}
