//! Integer rounding helpers
//!
//! Sensor conversions scale first, then round to nearest
//! with halves rounding towards positive infinity (`floor(x + 0.5)`). Doing
//! that in integers keeps the results exact and avoids `libm`.

/// Divide `numerator / denominator` rounding half up
///
/// `denominator` must be positive. Works for negative numerators:
/// `-2.5` rounds to `-2`, `-2.6` to `-3`.
pub const fn round_div(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Unsigned variant of [`round_div`]
pub const fn round_div_u32(numerator: u32, denominator: u32) -> u32 {
    ((numerator as u64 * 2 + denominator as u64) / (denominator as u64 * 2)) as u32
}
