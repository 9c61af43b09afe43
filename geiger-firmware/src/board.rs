//! Board glue
//!
//! Adapts embassy-rp peripherals to the `geiger-hal` traits and holds the
//! board's configuration overrides.
//!
//! Pin assignments (Raspberry Pi Pico):
//! - GPIO0 / GPIO1: UART0 TX / RX to the SerLCD display and host
//! - GPIO2: detector pulse output, open collector, falling edge per event
//! - GPIO25: on-board LED (active high)

use embassy_rp::gpio::Output;
use embassy_rp::uart::{Config as RpUartConfig, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits};

use geiger_core::config::{ConfigError, IndicatorConfig, MonitorConfig};
use geiger_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use geiger_hal::OutputPin;

/// Activity LED driven through the HAL trait
pub struct LedPin(pub Output<'static>);

impl OutputPin for LedPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }
}

/// Configuration for this board
///
/// The Pico's on-board LED is active high, unlike detector boards
/// that sink LED current.
pub fn board_config() -> Result<MonitorConfig, ConfigError> {
    let config = MonitorConfig {
        indicator: IndicatorConfig {
            active_low: false,
            ..Default::default()
        },
        ..Default::default()
    };
    config.validate()?;
    Ok(config)
}

/// Translate HAL UART settings into embassy-rp's config
pub fn uart_config(config: &UartConfig) -> RpUartConfig {
    let mut cfg = RpUartConfig::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    cfg
}
