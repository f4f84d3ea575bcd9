use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate
///
/// Each call to [`wait`](FrameLimiter::wait) sleeps for whatever is left of
/// the frame budget, measured from the end of the previous wait. A frame that
/// already used its whole budget does not sleep at all.
pub struct FrameLimiter {
    budget: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(budget: Duration) -> Self {
        FrameLimiter {
            budget,
            frame_start: Instant::now(),
        }
    }

    /// Time still left in the budget after `elapsed` has been spent
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        let remaining = self.remaining(elapsed);

        if remaining.is_zero() {
            tracing::debug!(?elapsed, budget = ?self.budget, "Frame overran its budget");
        } else {
            std::thread::sleep(remaining);
        }

        self.frame_start = Instant::now();
    }
}
