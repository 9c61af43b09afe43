//! Geiger counter serial protocol
//!
//! This crate defines both directions of the single UART link:
//!
//! - Counter → display: a fixed 36-byte status frame every tick, laid out for
//!   a 16x2 LCD driven by SparkFun SerLCD firmware
//! - Host → counter: single command bytes (`z` reset, `t` self-test)
//!
//! # Status frame
//!
//! ```text
//! ┌──────┬──────┬──────────────────────────┬──────┬──────┬──────────────────────────┐
//! │ 0xFE │ 0x80 │ "12 c/s (max 15)"  + pad │ 0xFE │ 0xC0 │ "340 c/m (max 402)"+ pad │
//! │ 1B   │ 1B   │ 16B                      │ 1B   │ 1B   │ 16B                      │
//! └──────┴──────┴──────────────────────────┴──────┴──────┴──────────────────────────┘
//! ```
//!
//! There is no checksum or acknowledgement; a corrupted frame is simply
//! replaced by the next one a second later.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod readings;
pub mod status;

pub use command::{Command, RESET_BYTE, SELF_TEST_BYTE};
pub use readings::{PartialReadings, Readings};
pub use status::{StatusError, StatusFrame, StatusParser, FRAME_LEN, LINE_COUNT, LINE_LEN};
