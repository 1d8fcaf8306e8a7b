//! Peripheral driver implementations
//!
//! This crate talks to the board's I2C peripherals through
//! [`dadabit_hal::I2cBus`] and hands calibrated values to the caller:
//!
//! - Temperature/humidity sensor (AHT10-class, 0x38)
//! - Colour sensor (APDS-9960, 0x39)
//! - Line follower (0x78) and ultrasonic ranger (0x77)
//! - Rain-water sensor (analog)
//! - Wireless module (0x69, ASCII command protocol)
//!
//! All peripherals share one bus, so drivers borrow it per call.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;
pub mod wireless;

#[cfg(test)]
pub(crate) mod fake;
