//! Activity indicator task
//!
//! Owns the LED. Flashes it for each pulse and runs the self-test
//! sequence. Lives in its own task so neither the flash delay nor the
//! self-test holds up counting or ticks.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Delay, Timer};

use geiger_core::command::SelfTest;
use geiger_core::config::IndicatorConfig;
use geiger_core::indicator::Indicator;

use crate::board::LedPin;
use crate::channels::{PULSE_FLASH, SELF_TEST};

/// Indicator task - pulse flashes and self-test
#[embassy_executor::task]
pub async fn indicator_task(mut led: Indicator<LedPin>, config: IndicatorConfig) {
    info!("Indicator task started");

    let mut delay = Delay;

    loop {
        match select(PULSE_FLASH.wait(), SELF_TEST.wait()).await {
            Either::First(()) => {
                led.on();
                Timer::after_millis(config.flash_ms as u64).await;
                led.off();
            }
            Either::Second(()) => {
                debug!("Running self-test");
                SelfTest::from_config(&config).run(&mut led, &mut delay).await;
                led.off();
                // Flashes requested during the sequence are stale
                PULSE_FLASH.reset();
                debug!("Self-test complete");
            }
        }
    }
}
