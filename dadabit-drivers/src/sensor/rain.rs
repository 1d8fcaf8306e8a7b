//! Analog rain-water sensor

use dadabit_core::math::round_div_u32;
use dadabit_hal::AdcReader;

/// Full-scale divisor for the 10-bit converter
const ADC_SPAN: u32 = 1024;

/// Scale a 10-bit conversion into 0–255
///
/// `round(adc * 255 / 1024)`; out-of-range input saturates.
pub fn scale_reading(adc: u16) -> u8 {
    round_div_u32(adc as u32 * 255, ADC_SPAN).min(255) as u8
}

/// Rain-water level in 0–255, 0 on a failed conversion
pub fn rain_level<A: AdcReader>(adc: &mut A) -> u8 {
    adc.read().map(scale_reading).unwrap_or(0)
}
