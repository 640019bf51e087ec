//! Millisecond uptime source for hosts whose events carry no timestamp.

use web_time::Instant;

/// Monotonic millisecond clock anchored at construction time.
///
/// Everything in the core takes explicit `u64` millisecond timestamps; this
/// clock is only a convenience for hosts that cannot read one off their
/// input events. Backed by `web_time` so it works on `wasm32` too.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
