//! Colour maths for the APDS-9960 ambient light/RGB channels
//!
//! The driver reads four raw 16-bit counts; everything after that lives
//! here so it can be tested without a bus:
//!
//! 1. clamp red/green/blue to the white-balance ceilings
//! 2. rescale each into 0–255
//! 3. derive hue from the rescaled triple
//! 4. classify against the calibration breakpoints

pub mod classify;
pub mod hue;

pub use classify::classify;
pub use hue::{chroma, rgb_to_hue};

use crate::config::WhiteBalance;
use crate::math::round_div_u32;

/// Discrete colours the classifier can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red = 0x01,
    Green = 0x02,
    Blue = 0x03,
    Black = 0x04,
    White = 0x05,
    None = 0x06,
}

/// Selects one rescaled channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbChannel {
    Red = 0x01,
    Green = 0x02,
    Blue = 0x03,
}

/// Raw channel counts as read from the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawColor {
    pub clear: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// White-balanced channel values in 0–255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channel(&self, channel: RgbChannel) -> u8 {
        match channel {
            RgbChannel::Red => self.r,
            RgbChannel::Green => self.g,
            RgbChannel::Blue => self.b,
        }
    }
}

/// Clamp a raw count to `ceiling` and rescale it linearly into 0–255
///
/// A zero ceiling maps everything to 0.
pub const fn rescale(raw: u16, ceiling: u16) -> u8 {
    if ceiling == 0 {
        return 0;
    }
    let clamped = if raw > ceiling { ceiling } else { raw };
    round_div_u32(clamped as u32 * 255, ceiling as u32) as u8
}

impl RawColor {
    /// Apply white balance to the colour channels
    pub const fn balanced(&self, wb: &WhiteBalance) -> Rgb {
        Rgb {
            r: rescale(self.red, wb.red),
            g: rescale(self.green, wb.green),
            b: rescale(self.blue, wb.blue),
        }
    }
}
