//! Easing curves matching the CSS `transition-timing-function` keywords.

/// Timing curve applied to a linear progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`, the curve the sheet settles with.
    #[default]
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Arbitrary `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` to eased progress.
    pub fn transform(&self, fraction: f32) -> f32 {
        let curve = match *self {
            Easing::Linear => return fraction.clamp(0.0, 1.0),
            Easing::Ease => CubicBezier::new(0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => CubicBezier::new(x1, y1, x2, y2),
        };
        curve.solve(fraction)
    }
}

/// Polynomial coefficients of a unit cubic bezier with fixed end points
/// (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Finds the curve parameter whose x equals `x`: Newton-Raphson first,
    /// bisection when the slope is too flat to converge.
    fn t_for_x(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = self.x_at(t) - x;
            if error.abs() < 1e-6 {
                return t;
            }
            let slope = self.dx_at(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..20 {
            let error = self.x_at(t) - x;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            0.0
        } else if fraction >= 1.0 {
            1.0
        } else {
            self.y_at(self.t_for_x(fraction))
        }
    }
}
