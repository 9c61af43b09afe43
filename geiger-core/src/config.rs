//! Configuration types
//!
//! Board-agnostic settings for the counter. The window length is fixed at
//! [`WINDOW_SECONDS`](crate::window::WINDOW_SECONDS) and deliberately not
//! configurable.

use geiger_hal::UartConfig;

use crate::transmit::OverlapPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tick period
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick interval of zero
    ZeroTickInterval,
    /// Baud rate of zero
    ZeroBaudRate,
    /// Pulse flash does not finish before the next tick
    FlashTooLong,
    /// Serial link too slow to send one frame per tick
    LinkTooSlow,
}

/// Activity indicator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorConfig {
    /// How long the indicator stays lit after a pulse
    pub flash_ms: u32,
    /// LED lights when the pin is driven low
    pub active_low: bool,
    /// Number of toggles in the self-test sequence
    pub self_test_toggles: u8,
    /// Delay after each self-test toggle
    pub self_test_interval_ms: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            flash_ms: 30,
            active_low: false,
            self_test_toggles: 10,
            self_test_interval_ms: 100,
        }
    }
}

/// Complete counter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorConfig {
    /// Tick period in milliseconds
    pub tick_interval_ms: u32,
    /// Display / command UART settings
    pub serial: UartConfig,
    /// Activity indicator settings
    pub indicator: IndicatorConfig,
    /// Behaviour when a tick finishes while the previous frame is draining
    pub overlap_policy: OverlapPolicy,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            serial: UartConfig::default(),
            indicator: IndicatorConfig::default(),
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

impl MonitorConfig {
    /// Check the settings are usable together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.serial.baudrate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        if self.indicator.flash_ms >= self.tick_interval_ms {
            return Err(ConfigError::FlashTooLong);
        }
        if self.frame_time_ms() >= self.tick_interval_ms {
            return Err(ConfigError::LinkTooSlow);
        }
        Ok(())
    }

    /// Time on the wire for one status frame, rounded up
    ///
    /// Ten bit times per byte (start, eight data, stop).
    pub fn frame_time_ms(&self) -> u32 {
        let bits = geiger_protocol::FRAME_LEN as u64 * 10;
        let baud = u64::from(self.serial.baudrate.max(1));
        (bits * 1000).div_ceil(baud) as u32
    }
}
