//! Colour classification
//!
//! First match wins:
//!
//! 1. bright and balanced → White
//! 2. bright enough for hue → Red / Green / Blue by hue band, else None
//! 3. dim with every channel inside the black window → Black
//! 4. otherwise None
//!
//! Hue bands are only consulted for chromatic readings. A grey reading has
//! hue 0, which would otherwise land in the red band.

use super::hue::{chroma, rgb_to_hue};
use super::{Color, RawColor, Rgb};
use crate::config::ColorCalibration;

/// Classify a raw sensor reading
pub fn classify(raw: RawColor, cal: &ColorCalibration) -> Color {
    let rgb = raw.balanced(&cal.white_balance);
    classify_balanced(raw.clear, rgb, cal)
}

/// Classify an already white-balanced reading
pub fn classify_balanced(clear: u16, rgb: Rgb, cal: &ColorCalibration) -> Color {
    let (r, g, b) = (rgb.r as f32, rgb.g as f32, rgb.b as f32);

    if clear > cal.white_clear_min
        && r > cal.white_channel_min
        && g > cal.white_channel_min
        && b > cal.white_channel_min
    {
        return Color::White;
    }

    if clear > cal.hue_clear_min {
        if chroma(rgb) == 0 {
            return Color::None;
        }
        let hue = rgb_to_hue(rgb);
        return if hue < cal.red_hue_below || hue > cal.red_hue_above {
            Color::Red
        } else if cal.green_hue.contains(hue) {
            Color::Green
        } else if cal.blue_hue.contains(hue) {
            Color::Blue
        } else {
            Color::None
        };
    }

    if clear > cal.black_clear_min
        && cal.black_red.contains(r)
        && cal.black_green.contains(g)
        && cal.black_blue.contains(b)
    {
        return Color::Black;
    }

    Color::None
}
