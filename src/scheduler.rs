//! Fixed-period tick scheduling
//!
//! The host hands over whatever frame time it measured; the clock turns that
//! into a whole number of ticks at the configured rate. Stopping or resuming
//! the loop is the host's business, the clock only counts.

use crate::consts::{MAX_CATCH_UP_TICKS, MAX_FRAME_DT};

/// Accumulates frame time into fixed ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds per tick
    period: f32,
    accumulator: f32,
}

impl FrameClock {
    /// Clock ticking every `frame_delay_ms` whole milliseconds
    pub fn new(frame_delay_ms: u32) -> Self {
        Self {
            period: frame_delay_ms.max(1) as f32 / 1000.0,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks are due.
    ///
    /// Long gaps are clamped and at most `MAX_CATCH_UP_TICKS` are returned;
    /// time beyond that is dropped rather than carried over.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut due = 0;
        while self.accumulator >= self.period && due < MAX_CATCH_UP_TICKS {
            self.accumulator -= self.period;
            due += 1;
        }
        if due == MAX_CATCH_UP_TICKS {
            self.accumulator = self.accumulator.min(self.period);
        }
        due
    }

    /// Forget partial time (after the host was suspended)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
