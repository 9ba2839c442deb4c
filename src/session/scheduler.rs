//! Fixed-interval step timing

/// Default interval between algorithm steps, in seconds of host time
pub const STEP_INTERVAL: f32 = 0.01;

/// Accumulates frame deltas against a fixed interval and decides when a
/// generator step may fire.
///
/// At most one step fires per [`tick`](StepScheduler::tick) call, no matter
/// how large the delta: a host frame-rate spike never turns into a burst of
/// sorting work, it only leaves the accumulator primed for later frames.
#[derive(Debug)]
pub struct StepScheduler {
    interval: f32,
    accumulated: f32,
}

impl StepScheduler {
    pub fn new(interval: f32) -> Self {
        StepScheduler {
            interval,
            accumulated: 0.0,
        }
    }

    /// Add `dt` and report whether one step should fire.
    ///
    /// On fire, exactly one interval is drained from the accumulator
    /// (clamped at zero). The accumulator never goes negative.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.accumulated += dt.max(0.0);
        if self.accumulated >= self.interval {
            self.accumulated = (self.accumulated - self.interval).max(0.0);
            true
        } else {
            false
        }
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::new(STEP_INTERVAL)
    }
}
