//! Rubber-band overscroll beyond the outermost snap points.

use crate::gesture_constants::{
    DEFAULT_RUBBER_BAND_FACTOR, RUBBER_BAND_DECAY, RUBBER_BAND_MAX_OVERSCROLL,
};

/// Elastic clamp applied to every candidate height while dragging.
///
/// Inside `[lo, hi]` heights pass through. Outside, the overshoot is mapped
/// through `1 - e^(-d / 200)` so the sheet keeps following the pointer but
/// decelerates and never travels further than `50 * factor` past the limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RubberBand {
    factor: f32,
}

impl RubberBand {
    pub const fn new(factor: f32) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Largest distance the sheet can be pulled past a limit.
    pub fn max_overscroll(&self) -> f32 {
        RUBBER_BAND_MAX_OVERSCROLL * self.factor
    }

    /// Clamps `height` against `bounds` (lowest, highest snap height).
    /// Without bounds the height passes through.
    pub fn clamp(&self, height: f32, bounds: Option<(f32, f32)>) -> f32 {
        let Some((lo, hi)) = bounds else {
            return height;
        };

        if height > hi {
            hi + self.resist(height - hi)
        } else if height < lo {
            lo - self.resist(lo - height)
        } else {
            height
        }
    }

    fn resist(&self, overshoot: f32) -> f32 {
        (1.0 - (-overshoot / RUBBER_BAND_DECAY).exp()) * self.max_overscroll()
    }
}

impl Default for RubberBand {
    fn default() -> Self {
        Self::new(DEFAULT_RUBBER_BAND_FACTOR)
    }
}
