//! Shared state and inter-task signals
//!
//! Defines the statics shared between Embassy tasks. The pulse counter is
//! lock-free; the tracker and transmitter sit behind critical-section
//! mutexes that are only ever held for a synchronous update.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use geiger_core::counter::EventCounter;
use geiger_core::rate::RateTracker;
use geiger_core::transmit::{OverlapPolicy, Transmitter};

/// Pulses since the last tick (written by the pulse task)
pub static PULSE_COUNTER: EventCounter = EventCounter::new();

/// Rolling window and peaks (tick task, reset by the command task)
pub static TRACKER: Mutex<CriticalSectionRawMutex, RefCell<RateTracker>> =
    Mutex::new(RefCell::new(RateTracker::new()));

/// Display buffer and drain state (filled by tick task, drained by TX task)
pub static TRANSMITTER: Mutex<CriticalSectionRawMutex, RefCell<Transmitter>> =
    Mutex::new(RefCell::new(Transmitter::new(OverlapPolicy::Skip)));

/// Signal that a new status frame is waiting to be drained
pub static FRAME_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a pulse arrived and the indicator should flash
pub static PULSE_FLASH: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the host asked for the indicator self-test
pub static SELF_TEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
