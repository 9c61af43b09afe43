//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! [`crate::channels`].

pub mod indicator;
pub mod pulse;
pub mod serial_rx;
pub mod serial_tx;
pub mod tick;

pub use indicator::indicator_task;
pub use pulse::pulse_task;
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
pub use tick::tick_task;
