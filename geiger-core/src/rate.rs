//! Per-tick rate and peak tracking
//!
//! Runs once per tick on the tick side only. The sequence inside
//! [`RateTracker::record`] is fixed: insert, per-second peak, window sum,
//! per-minute peak. Peaks therefore only ever reflect completed ticks.

use geiger_protocol::Readings;

use crate::counter::EventCounter;
use crate::window::{RollingWindow, WINDOW_SECONDS};

/// Rolling window plus running maxima since the last reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTracker {
    window: RollingWindow<WINDOW_SECONDS>,
    peak_per_second: u16,
    peak_per_minute: u32,
}

impl Default for RateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTracker {
    /// Create a tracker with an empty window and zero peaks
    pub const fn new() -> Self {
        Self {
            window: RollingWindow::new(),
            peak_per_second: 0,
            peak_per_minute: 0,
        }
    }

    /// Snapshot the counter and fold it into the window
    ///
    /// This is the complete tick handler body short of formatting.
    pub fn sample(&mut self, counter: &EventCounter) -> Readings {
        let tick_count = counter.snapshot_and_reset();
        self.record(tick_count)
    }

    /// Fold one tick's count into the window and peaks
    pub fn record(&mut self, tick_count: u16) -> Readings {
        self.window.insert(tick_count);

        if tick_count > self.peak_per_second {
            self.peak_per_second = tick_count;
        }

        let window_sum = self.window.sum();
        if window_sum > self.peak_per_minute {
            self.peak_per_minute = window_sum;
        }

        Readings {
            per_second: tick_count,
            peak_per_second: self.peak_per_second,
            per_minute: window_sum,
            peak_per_minute: self.peak_per_minute,
        }
    }

    /// Zero the window and both peaks
    pub fn reset(&mut self) {
        self.window.reset();
        self.peak_per_second = 0;
        self.peak_per_minute = 0;
    }

    /// Highest single-tick count since the last reset
    pub fn peak_per_second(&self) -> u16 {
        self.peak_per_second
    }

    /// Highest window sum since the last reset
    pub fn peak_per_minute(&self) -> u32 {
        self.peak_per_minute
    }

    /// Current window sum
    pub fn per_minute(&self) -> u32 {
        self.window.sum()
    }

    /// The underlying rolling window
    pub fn window(&self) -> &RollingWindow<WINDOW_SECONDS> {
        &self.window
    }
}
