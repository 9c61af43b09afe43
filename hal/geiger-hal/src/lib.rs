//! Geiger Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits and shared settings
//! the counter logic is written against. Board support (RP2040 via embassy, or host-side mocks in
//! tests) implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  geiger-firmware / host tests           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  geiger-core (counter, tracker, tx)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  geiger-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Activity indicator output
//! - [`uart::UartConfig`] - Serial line settings (not a trait, shared by board crates)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use uart::UartConfig;
