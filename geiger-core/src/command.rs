//! Command interpretation
//!
//! Received bytes are acted on immediately, outside the tick. A reset is
//! applied in place; the self-test is handed back as an [`Action`] so the
//! caller can run it somewhere that does not hold up pulse counting.

use embedded_hal_async::delay::DelayNs;

use geiger_hal::OutputPin;
use geiger_protocol::Command;

use crate::config::IndicatorConfig;
use crate::counter::EventCounter;
use crate::indicator::Indicator;
use crate::rate::RateTracker;

/// What the caller has left to do after a command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Byte was not a command
    Ignored,
    /// Counter, window and peaks were zeroed
    Reset,
    /// Caller should run a [`SelfTest`]
    SelfTest,
}

/// Interpret one received byte
///
/// The reset touches the pulse counter, so on hardware call this with the
/// pulse source masked (e.g. inside the critical section guarding the
/// tracker).
pub fn interpret(byte: u8, counter: &EventCounter, tracker: &mut RateTracker) -> Action {
    match Command::from_byte(byte) {
        Some(Command::Reset) => {
            reset_all(counter, tracker);
            Action::Reset
        }
        Some(Command::SelfTest) => Action::SelfTest,
        None => Action::Ignored,
    }
}

/// Zero the pulse count, rolling window and both peaks
pub fn reset_all(counter: &EventCounter, tracker: &mut RateTracker) {
    counter.reset();
    tracker.reset();
}

/// Indicator toggle sequence confirming the unit is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTest {
    remaining: u8,
    interval_ms: u32,
}

impl SelfTest {
    /// A sequence of `toggles` flips, `interval_ms` apart
    pub fn new(toggles: u8, interval_ms: u32) -> Self {
        Self {
            remaining: toggles,
            interval_ms,
        }
    }

    /// The sequence described by the indicator configuration
    pub fn from_config(config: &IndicatorConfig) -> Self {
        Self::new(config.self_test_toggles, config.self_test_interval_ms)
    }

    /// Toggle once if any toggles remain
    ///
    /// Returns false when the sequence is already complete.
    pub fn step<P: OutputPin>(&mut self, indicator: &mut Indicator<P>) -> bool {
        if self.remaining == 0 {
            return false;
        }
        indicator.toggle();
        self.remaining -= 1;
        true
    }

    /// Toggles left to perform
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Delay after each toggle
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Run the whole sequence, yielding to the executor between toggles
    pub async fn run<P: OutputPin, D: DelayNs>(mut self, indicator: &mut Indicator<P>, delay: &mut D) {
        while self.step(indicator) {
            delay.delay_ms(self.interval_ms).await;
        }
    }
}
