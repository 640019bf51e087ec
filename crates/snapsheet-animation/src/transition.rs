//! Frame-sampled height transitions.

use crate::easing::Easing;

/// Duration, easing and delay of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_ms: u64,
    pub easing: Easing,
    pub delay_ms: u64,
}

impl AnimationSpec {
    pub const fn tween(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            delay_ms: 0,
        }
    }

    /// CSS `height <duration> ease-out`.
    pub const fn ease_out(duration_ms: u64) -> Self {
        Self::tween(duration_ms, Easing::EaseOut)
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Progress in `[0, 1]` after `elapsed_ms`, easing applied.
    pub fn progress(&self, elapsed_ms: u64) -> f32 {
        let active = elapsed_ms.saturating_sub(self.delay_ms);
        if self.duration_ms == 0 {
            return if elapsed_ms >= self.delay_ms { 1.0 } else { 0.0 };
        }
        let fraction = (active as f32 / self.duration_ms as f32).min(1.0);
        self.easing.transform(fraction)
    }

    pub fn total_ms(&self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::ease_out(300)
    }
}

/// A height moving from `from` to `to`, started at `start_ms`.
///
/// Sampling is pure: the same frame time always yields the same height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightTransition {
    from: f32,
    to: f32,
    start_ms: u64,
    spec: AnimationSpec,
}

impl HeightTransition {
    pub fn new(from: f32, to: f32, start_ms: u64, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            start_ms,
            spec,
        }
    }

    pub fn start_height(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Height at frame time `now_ms`. Frames before the start sample the
    /// starting height.
    pub fn sample(&self, now_ms: u64) -> f32 {
        let progress = self.spec.progress(now_ms.saturating_sub(self.start_ms));
        self.from + (self.to - self.from) * progress
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.spec.total_ms()
    }

    /// Restarts toward `to` from wherever the transition is at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, to: f32, spec: AnimationSpec) {
        let current = self.sample(now_ms);
        log::trace!("retarget {current} -> {to} ({} ms)", spec.duration_ms);
        *self = Self::new(current, to, now_ms, spec);
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
