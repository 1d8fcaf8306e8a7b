//! Colour sensor calibration constants
//!
//! Values were measured against the board's APDS-9960 under its own white
//! LED, so they only hold for that optical stack.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw channel count treated as full-scale for each colour
///
/// Readings above the ceiling are clamped before rescaling into 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WhiteBalance {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// Open interval used for hue bands and channel windows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenRange {
    pub above: f32,
    pub below: f32,
}

impl OpenRange {
    pub const fn new(above: f32, below: f32) -> Self {
        Self { above, below }
    }

    /// Strictly inside the interval
    pub fn contains(&self, value: f32) -> bool {
        value > self.above && value < self.below
    }
}

/// Classification breakpoints
///
/// Clear-channel thresholds are raw counts; channel bounds are on the
/// rescaled 0–255 values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorCalibration {
    pub white_balance: WhiteBalance,
    /// Clear count above which a bright, balanced reading is white
    pub white_clear_min: u16,
    /// Every rescaled channel must exceed this for white
    pub white_channel_min: f32,
    /// Clear count above which hue bands are evaluated
    pub hue_clear_min: u16,
    /// Red wraps around 0°: below this ...
    pub red_hue_below: f32,
    /// ... or above this
    pub red_hue_above: f32,
    pub green_hue: OpenRange,
    pub blue_hue: OpenRange,
    /// Clear count above which the black window is evaluated
    pub black_clear_min: u16,
    pub black_red: OpenRange,
    pub black_green: OpenRange,
    pub black_blue: OpenRange,
}

/// Factory calibration for the Dadabit colour module
pub const DEFAULT_COLOR_CALIBRATION: ColorCalibration = ColorCalibration {
    white_balance: WhiteBalance {
        red: 2130,
        green: 3500,
        blue: 4620,
    },
    white_clear_min: 2200,
    white_channel_min: 65.0,
    hue_clear_min: 800,
    red_hue_below: 8.0,
    red_hue_above: 350.0,
    green_hue: OpenRange::new(60.0, 170.0),
    blue_hue: OpenRange::new(195.0, 230.0),
    black_clear_min: 200,
    black_red: OpenRange::new(10.0, 16.5),
    black_green: OpenRange::new(7.0, 15.0),
    black_blue: OpenRange::new(7.0, 14.0),
};

impl Default for ColorCalibration {
    fn default() -> Self {
        DEFAULT_COLOR_CALIBRATION
    }
}
