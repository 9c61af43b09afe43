//! Tick task
//!
//! Once per interval: snapshot the pulse counter, update the window and
//! peaks, render the status frame and hand it to the transmitter. Never
//! waits on the UART.

use defmt::*;
use embassy_time::{Duration, Ticker};

use geiger_core::display;
use geiger_core::transmit::LoadOutcome;

use crate::channels::{FRAME_READY, PULSE_COUNTER, TRACKER, TRANSMITTER};

/// Tick task - samples and aggregates once per interval
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));

    loop {
        ticker.next().await;

        // Snapshot and aggregate in one critical section so a reset command
        // cannot land between them
        let readings = TRACKER.lock(|tracker| tracker.borrow_mut().sample(&PULSE_COUNTER));
        debug!(
            "Tick: {} c/s (max {}), {} c/m (max {})",
            readings.per_second,
            readings.peak_per_second,
            readings.per_minute,
            readings.peak_per_minute
        );

        let outcome = TRANSMITTER.lock(|tx| {
            tx.borrow_mut()
                .begin(|frame| display::render_into(frame, &readings))
        });

        match outcome {
            LoadOutcome::Started => {}
            LoadOutcome::Restarted => warn!("Previous frame still draining, restarted"),
            LoadOutcome::Skipped => warn!("Previous frame still draining, display update skipped"),
        }

        if outcome.needs_drain() {
            FRAME_READY.signal(());
        }
    }
}
