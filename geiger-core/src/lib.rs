//! Board-agnostic core logic for the Geiger counter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Pulse counter shared with the edge handler
//! - Rolling one-minute window and rate/peak tracking
//! - Status frame rendering
//! - Readiness-driven frame transmitter
//! - Command interpretation and the indicator self-test
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod counter;
pub mod display;
pub mod indicator;
pub mod rate;
pub mod transmit;
pub mod window;

pub use geiger_protocol::Readings;
