//! Frame clock with lag smoothing

use std::time::Instant;

/// Tracks frame time for the animation loop.
///
/// A gap between frames longer than `lag_threshold` (window hidden, process
/// suspended, debugger break) is replaced by `lag_step`, so transitions resume
/// where they were instead of jumping to their end.
pub struct FrameClock {
    /// Total smoothed time in seconds
    pub total_time: f64,
    /// Smoothed time since the last tick in seconds
    pub delta_time: f64,
    /// Gaps longer than this are treated as lag
    pub lag_threshold: f64,
    /// Delta substituted for a lagging frame
    pub lag_step: f64,
    frame_count: u64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            lag_threshold: 0.5,
            lag_step: 1.0 / 30.0,
            frame_count: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance from the wall clock. Call once per frame.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.frame_count += 1;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.tick_with(elapsed)
    }

    /// Advance by a measured gap of `elapsed` seconds
    pub fn tick_with(&mut self, elapsed: f64) -> f64 {
        let elapsed = elapsed.max(0.0);
        self.delta_time = if elapsed > self.lag_threshold {
            log::debug!("Frame gap of {elapsed:.3}s smoothed to {:.3}s", self.lag_step);
            self.lag_step
        } else {
            elapsed
        };
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
