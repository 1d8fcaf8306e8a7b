//! Hue derivation
//!
//! Standard max/min chroma method on the rescaled triple. The dominant
//! channel picks the 60° segment; ties resolve red, then green, then blue.

use super::Rgb;

/// Max channel minus min channel
pub fn chroma(rgb: Rgb) -> u8 {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    max - min
}

/// Hue in degrees, in `[0, 360)`
///
/// Achromatic input (zero chroma) has hue 0.
pub fn rgb_to_hue(rgb: Rgb) -> f32 {
    let c = chroma(rgb);
    if c == 0 {
        return 0.0;
    }

    let (r, g, b) = (rgb.r as f32, rgb.g as f32, rgb.b as f32);
    let c = c as f32;

    let hue = if rgb.r >= rgb.g && rgb.r >= rgb.b {
        60.0 * (g - b) / c
    } else if rgb.g >= rgb.b {
        60.0 * (b - r) / c + 120.0
    } else {
        60.0 * (r - g) / c + 240.0
    };

    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_primaries() {
        assert!(approx(rgb_to_hue(Rgb::new(255, 0, 0)), 0.0));
        assert!(approx(rgb_to_hue(Rgb::new(0, 255, 0)), 120.0));
        assert!(approx(rgb_to_hue(Rgb::new(0, 0, 255)), 240.0));
    }

    #[test]
    fn test_red_segment_wraps() {
        // Red dominant with more blue than green lands just under 360
        let hue = rgb_to_hue(Rgb::new(200, 10, 20));
        assert!(hue > 350.0 && hue < 360.0);

        // Red dominant leaning green stays just above 0
        let hue = rgb_to_hue(Rgb::new(200, 20, 10));
        assert!(hue > 0.0 && hue < 8.0);
    }

    #[test]
    fn test_secondaries() {
        assert!(approx(rgb_to_hue(Rgb::new(255, 255, 0)), 60.0));
        assert!(approx(rgb_to_hue(Rgb::new(0, 255, 255)), 180.0));
        assert!(approx(rgb_to_hue(Rgb::new(255, 0, 255)), 300.0));
    }

    #[test]
    fn test_achromatic_is_zero() {
        assert_eq!(rgb_to_hue(Rgb::new(0, 0, 0)), 0.0);
        assert_eq!(rgb_to_hue(Rgb::new(128, 128, 128)), 0.0);
        assert_eq!(chroma(Rgb::new(128, 128, 128)), 0);
    }

    #[test]
    fn test_hue_always_in_range() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let hue = rgb_to_hue(Rgb::new(r, g, b));
                    assert!((0.0..360.0).contains(&hue), "{} {} {} -> {}", r, g, b, hue);
                }
            }
        }
    }
}
