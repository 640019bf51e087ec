//! Sheet configuration and validation.

use crate::backdrop::BackdropFill;
use crate::error::SheetConfigError;
use snapsheet_animation::AnimationSpec;
use snapsheet_core::gesture_constants::{DEFAULT_RUBBER_BAND_FACTOR, FLICK_VELOCITY_THRESHOLD};
use snapsheet_core::{ExclusionZone, Viewport};
use std::rc::Rc;

/// Settle animation after the pointer is released (CSS `height 0.2s ease-out`).
pub const RELEASE_SETTLE: AnimationSpec = AnimationSpec::ease_out(200);

/// Settle animation for programmatic snaps and content reflows
/// (CSS `height 0.3s ease-out`).
pub const SNAP_SETTLE: AnimationSpec = AnimationSpec::ease_out(300);

/// Everything a sheet needs besides its host and callbacks.
///
/// ```ignore
/// let config = SheetConfig::new()
///     .with_snap_points([120.0, 360.0, 640.0])
///     .with_background_color("bg-zinc-900")
///     .with_excluded_region(ExcludedTargets::new().with(TargetId(42)));
/// ```
#[derive(Clone)]
pub struct SheetConfig {
    /// Resting heights in any order; `None` selects the default peek/open
    /// pair.
    pub snap_points: Option<Vec<f32>>,
    pub backdrop: BackdropFill,
    pub excluded_region: Option<Rc<dyn ExclusionZone>>,
    pub rubber_band_factor: f32,
    /// Flick threshold in px/ms.
    pub velocity_threshold: f32,
    pub viewport: Viewport,
    pub release_settle: AnimationSpec,
    pub snap_settle: AnimationSpec,
}

impl SheetConfig {
    pub fn new() -> Self {
        Self {
            snap_points: None,
            backdrop: BackdropFill::default(),
            excluded_region: None,
            rubber_band_factor: DEFAULT_RUBBER_BAND_FACTOR,
            velocity_threshold: FLICK_VELOCITY_THRESHOLD,
            viewport: Viewport::default(),
            release_settle: RELEASE_SETTLE,
            snap_settle: SNAP_SETTLE,
        }
    }

    pub fn with_snap_points(mut self, snap_points: impl Into<Vec<f32>>) -> Self {
        self.snap_points = Some(snap_points.into());
        self
    }

    pub fn with_backdrop(mut self, backdrop: impl Into<BackdropFill>) -> Self {
        self.backdrop = backdrop.into();
        self
    }

    /// Shorthand for `with_backdrop(BackdropFill::parse(color))`.
    pub fn with_background_color(mut self, color: &str) -> Self {
        self.backdrop = BackdropFill::parse(color);
        self
    }

    pub fn with_excluded_region(mut self, region: impl ExclusionZone + 'static) -> Self {
        self.excluded_region = Some(Rc::new(region));
        self
    }

    pub fn with_rubber_band_factor(mut self, factor: f32) -> Self {
        self.rubber_band_factor = factor;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_settle_animations(mut self, release: AnimationSpec, snap: AnimationSpec) -> Self {
        self.release_settle = release;
        self.snap_settle = snap;
        self
    }

    pub fn validate(&self) -> Result<(), SheetConfigError> {
        if let Some(points) = &self.snap_points {
            validate_snap_points(points)?;
        }
        if !self.rubber_band_factor.is_finite() || self.rubber_band_factor < 0.0 {
            return Err(SheetConfigError::InvalidRubberBandFactor(
                self.rubber_band_factor,
            ));
        }
        if !self.velocity_threshold.is_finite() || self.velocity_threshold <= 0.0 {
            return Err(SheetConfigError::InvalidVelocityThreshold(
                self.velocity_threshold,
            ));
        }
        Ok(())
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("snap_points", &self.snap_points)
            .field("backdrop", &self.backdrop)
            .field("excluded_region", &self.excluded_region.is_some())
            .field("rubber_band_factor", &self.rubber_band_factor)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("viewport", &self.viewport)
            .field("release_settle", &self.release_settle)
            .field("snap_settle", &self.snap_settle)
            .finish()
    }
}

pub(crate) fn validate_snap_points(points: &[f32]) -> Result<(), SheetConfigError> {
    match points
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        Some((index, value)) => Err(SheetConfigError::InvalidSnapPoint {
            index,
            value: *value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SheetConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.rubber_band_factor, 1.0);
        assert_eq!(config.velocity_threshold, 0.5);
        assert_eq!(config.release_settle.duration_ms, 200);
        assert_eq!(config.snap_settle.duration_ms, 300);
    }

    #[test]
    fn rejects_bad_snap_points() {
        let config = SheetConfig::new().with_snap_points([100.0, -5.0]);
        assert_eq!(
            config.validate(),
            Err(SheetConfigError::InvalidSnapPoint {
                index: 1,
                value: -5.0
            })
        );

        let config = SheetConfig::new().with_snap_points([f32::INFINITY]);
        assert!(matches!(
            config.validate(),
            Err(SheetConfigError::InvalidSnapPoint { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_bad_tuning() {
        let config = SheetConfig::new().with_rubber_band_factor(-1.0);
        assert_eq!(
            config.validate(),
            Err(SheetConfigError::InvalidRubberBandFactor(-1.0))
        );

        let config = SheetConfig::new().with_velocity_threshold(0.0);
        assert_eq!(
            config.validate(),
            Err(SheetConfigError::InvalidVelocityThreshold(0.0))
        );
    }

    #[test]
    fn errors_render_readably() {
        let error = SheetConfigError::InvalidSnapPoint {
            index: 2,
            value: -1.0,
        };
        assert_eq!(
            error.to_string(),
            "snap point 2 is -1; expected a finite height >= 0"
        );
    }

    #[test]
    fn background_color_is_parsed() {
        let config = SheetConfig::new().with_background_color("bg-gray-50");
        assert_eq!(config.backdrop, BackdropFill::Class("bg-gray-50".into()));
    }
}
