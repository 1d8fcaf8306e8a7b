//! Board-agnostic core logic for the Dadabit expansion board
//!
//! This crate contains all application logic that does not touch a bus:
//!
//! - Compiled-in calibration constants and port assignment
//! - Colour maths (white balance, hue, classification)
//! - Sticky sensor readings owned by the controller
//! - Shared sensor error and selector types
//! - Integer rounding helpers used by the fixed-point conversions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod math;
pub mod sensor;
pub mod state;
