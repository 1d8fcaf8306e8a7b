//! Dadabit Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sensor drivers are written
//! against. Chip support lives in the firmware
//! crate, which wraps its peripherals in these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dadabit-firmware (RP2040 + embassy)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dadabit-drivers / dadabit-protocol     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dadabit-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`adc::AdcReader`] - Single analog channel
//!
//! Delays use [`embedded_hal::delay::DelayNs`] directly.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use adc::AdcReader;
pub use embedded_hal::delay::DelayNs;
pub use i2c::{HalI2c, I2cBus};
