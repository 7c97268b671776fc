//! Frame pacing for the fixed-step loop.

use std::thread;
use std::time::{Duration, Instant};

use game_core::Params;

/// Paces the loop to a minimum frame interval and reports a bounded delta.
///
/// This is the sole timing source for integration: `tick` blocks until the
/// minimum interval has elapsed since the previous tick, so per-step
/// displacement is bounded even across stalls.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Sleep until the minimum frame interval has passed since the previous
    /// tick, then return the elapsed time in seconds, capped at the maximum
    /// physics step.
    pub fn tick(&mut self) -> f32 {
        let deadline = self.last + Duration::from_secs_f32(Params::FIXED_DT);
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }

        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32().min(Params::MAX_DT);
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
