//! Fixed-rate tick source.
//!
//! Every game advances in whole steps of a fixed interval regardless of how
//! often the frame loop calls it. The clock accumulates wall-clock
//! milliseconds and hands back the number of steps that became due.
//! Suspending a game is simply not calling `advance`.
//!
//! The clock does not clamp its input; the session layer caps frame deltas
//! at `MAX_FRAME_DT_MS` before they reach a game.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStep {
    interval_ms: u64,
    accumulated_ms: u64,
}

impl FixedStep {
    /// Create a clock firing every `interval_ms` (values below 1 are treated as 1).
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Feed `dt_ms` of elapsed time and return how many whole steps are due.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms;
        let steps = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms -= steps * self.interval_ms;
        steps as u32
    }

    /// Drop any partially accumulated step.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    /// Milliseconds accumulated toward the next step.
    pub fn pending_ms(&self) -> u64 {
        self.accumulated_ms
    }
}
