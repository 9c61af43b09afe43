//! Geiger - Radiation Counter Firmware
//!
//! Main firmware binary for RP2040-based detector boards. Counts detector
//! pulses, keeps a one-minute rolling window and drives a 16x2 SerLCD
//! display over UART0. The same UART accepts single-byte host commands.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use geiger_core::config::MonitorConfig;
use geiger_core::indicator::Indicator;
use geiger_protocol::FRAME_LEN;

use crate::board::LedPin;
use crate::channels::TRANSMITTER;

mod board;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// UART transmit ring size
///
/// Kept below one frame so the transmitter stays draining until the tail of
/// the frame is on its way out, rather than acting as a second buffer.
const TX_RING_LEN: usize = 16;
const _: () = assert!(TX_RING_LEN < FRAME_LEN);

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; TX_RING_LEN]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Preempts the thread-mode executor so pulse edges are re-armed at once
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Geiger firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match board::board_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid board configuration: {:?}", e);
            error!("Using default configuration");
            MonitorConfig::default()
        }
    };

    info!(
        "Config: tick={}ms, baud={}, flash={}ms, frame={}ms",
        config.tick_interval_ms,
        config.serial.baudrate,
        config.indicator.flash_ms,
        config.frame_time_ms()
    );

    TRANSMITTER.lock(|tx| tx.borrow_mut().set_policy(config.overlap_policy));

    // Setup UART for display and host commands
    let tx_buf = TX_BUF.init([0u8; TX_RING_LEN]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        board::uart_config(&config.serial),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for display communication");

    // Detector output is open collector, one falling edge per event
    let pulse_input = Input::new(p.PIN_2, Pull::Up);

    // Activity LED, starts dark
    let idle_level = if config.indicator.active_low {
        Level::High
    } else {
        Level::Low
    };
    let led = Indicator::new(
        LedPin(Output::new(p.PIN_25, idle_level)),
        config.indicator.active_low,
    );

    info!("Pulse input and indicator initialized");

    // Pulse counting runs above everything else in thread mode
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(tasks::pulse_task(pulse_input)).unwrap();

    // Spawn tasks
    spawner
        .spawn(tasks::tick_task(config.tick_interval_ms))
        .unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner
        .spawn(tasks::indicator_task(led, config.indicator))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in spawned tasks; the executor sleeps the core
    // (WFE) whenever none of them is ready
    loop {
        embassy_time::Timer::after_secs(60).await;
        let skipped = TRANSMITTER.lock(|tx| tx.borrow().skipped());
        trace!("Main loop heartbeat ({} frames skipped)", skipped);
    }
}
