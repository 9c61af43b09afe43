//! Display UART transmit task
//!
//! Drains the transmitter one byte per UART-ready event. The transmitter
//! lock is taken per byte, never across an await.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::{FRAME_READY, TRANSMITTER};

/// Serial TX task - sends status frames to the display
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    loop {
        FRAME_READY.wait().await;

        let mut sent = 0usize;
        while let Some(byte) = TRANSMITTER.lock(|t| t.borrow_mut().next_byte()) {
            if let Err(e) = tx.write_all(&[byte]).await {
                warn!("Failed to send status byte: {:?}", e);
                TRANSMITTER.lock(|t| t.borrow_mut().abort());
                break;
            }
            sent += 1;
        }

        trace!("Status frame sent ({} bytes)", sent);
    }
}
