//! Command UART receive task
//!
//! Reads single command bytes and applies them as they arrive.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use geiger_core::command::{self, Action};

use crate::channels::{PULSE_COUNTER, SELF_TEST, TRACKER};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Serial RX task - receives command bytes from the host
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    handle_byte(byte);
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Apply one received byte
fn handle_byte(byte: u8) {
    // The critical section also masks the pulse interrupt path, so the
    // counter and tracker are zeroed together
    let action = TRACKER.lock(|tracker| {
        command::interpret(byte, &PULSE_COUNTER, &mut tracker.borrow_mut())
    });

    match action {
        Action::Reset => info!("Counters reset"),
        Action::SelfTest => {
            info!("Self-test requested");
            SELF_TEST.signal(());
        }
        Action::Ignored => trace!("Ignoring byte {=u8:#04x}", byte),
    }
}
