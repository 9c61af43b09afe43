//! Pulse counter
//!
//! The only state written from the pulse edge handler. Everything else the
//! tick handler touches is owned by the tick side alone.

use portable_atomic::{AtomicU16, Ordering};

/// Count of pulses since the last tick
///
/// Increments wrap at 65536; rates anywhere near that are outside what a
/// tube front-end can produce.
#[derive(Debug)]
pub struct EventCounter {
    pulses: AtomicU16,
}

impl Default for EventCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCounter {
    /// Create a counter at zero
    pub const fn new() -> Self {
        Self {
            pulses: AtomicU16::new(0),
        }
    }

    /// Record one detected pulse
    ///
    /// Safe to call from an interrupt or any task; never blocks.
    pub fn record_pulse(&self) {
        self.pulses.fetch_add(1, Ordering::Relaxed);
    }

    /// Take the current count and zero it in one atomic step
    ///
    /// Pulses recorded concurrently land either in the returned value or in
    /// the next snapshot, never both and never neither.
    pub fn snapshot_and_reset(&self) -> u16 {
        self.pulses.swap(0, Ordering::AcqRel)
    }

    /// Pulses recorded since the last snapshot, without clearing
    pub fn pending(&self) -> u16 {
        self.pulses.load(Ordering::Relaxed)
    }

    /// Discard any pulses recorded since the last snapshot
    pub fn reset(&self) {
        self.pulses.store(0, Ordering::Relaxed);
    }
}
