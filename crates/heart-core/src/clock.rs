use crate::constants::{MAX_FRAME_DELTA_SEC, REFERENCE_FRAME_SEC};
use crate::state::FrameTime;
use instant::Instant;

/// Source of per-frame timing for the animator.
pub trait FrameClock {
    /// Advance the clock and return the time since the previous tick together
    /// with the time since the clock started.
    fn tick(&mut self) -> FrameTime;
}

/// Wall clock. Works on wasm and native through `instant`.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Clock {
    fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        FrameTime {
            // Cap to avoid a huge catch-up step after a hidden tab
            delta: delta.min(MAX_FRAME_DELTA_SEC),
            elapsed: now.duration_since(self.start).as_secs_f64(),
        }
    }
}

/// Deterministic clock advancing by a fixed step per tick.
#[derive(Clone, Debug)]
pub struct SteppedClock {
    step: f64,
    elapsed: f64,
}

impl SteppedClock {
    pub fn new(step: f64) -> Self {
        Self {
            step: step.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn from_fps(fps: f64) -> Self {
        if fps > 0.0 {
            Self::new(1.0 / fps)
        } else {
            Self::new(REFERENCE_FRAME_SEC)
        }
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl FrameClock for SteppedClock {
    fn tick(&mut self) -> FrameTime {
        self.elapsed += self.step;
        FrameTime {
            delta: self.step,
            elapsed: self.elapsed,
        }
    }
}
