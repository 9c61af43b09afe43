//! Pulse edge task
//!
//! Counts one event per falling edge on the detector output. Spawned on the
//! interrupt executor, so it preempts the tick, serial and indicator tasks
//! and re-arms the edge wait within microseconds of each pulse. The only
//! gap left is that re-arm, far shorter than a tube's dead time.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::{PULSE_COUNTER, PULSE_FLASH};

/// Pulse task - records every detector edge
#[embassy_executor::task]
pub async fn pulse_task(mut input: Input<'static>) {
    info!("Pulse task started");

    loop {
        input.wait_for_falling_edge().await;
        PULSE_COUNTER.record_pulse();
        PULSE_FLASH.signal(());
    }
}
