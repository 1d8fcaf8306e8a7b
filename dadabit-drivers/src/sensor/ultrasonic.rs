//! I2C ultrasonic ranger
//!
//! The module exposes its last echo as a little-endian 16-bit value in
//! registers 0 and 1, in millimetres.

use dadabit_core::math::round_div_u32;
use dadabit_hal::I2cBus;

/// Fixed I2C address
pub const ULTRASONIC_ADDR: u8 = 0x77;

const REG_DISTANCE_L: u8 = 0x00;
const REG_DISTANCE_H: u8 = 0x01;

/// Raw values above this mean "no echo"
pub const MAX_VALID_RAW: u16 = 65500;

/// Convert a raw reading to whole centimetres
pub fn raw_to_cm(raw: u16) -> u16 {
    if raw > MAX_VALID_RAW {
        return 0;
    }
    round_div_u32(raw as u32, 10) as u16
}

/// Distance in whole centimetres, 0 when out of range or unreadable
pub fn distance_cm<B: I2cBus>(bus: &mut B) -> u16 {
    let read = |bus: &mut B, reg| bus.read_register(ULTRASONIC_ADDR, reg);
    match (read(bus, REG_DISTANCE_L), read(bus, REG_DISTANCE_H)) {
        (Ok(lo), Ok(hi)) => raw_to_cm(u16::from_le_bytes([lo, hi])),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBus;

    #[test]
    fn test_raw_to_cm() {
        assert_eq!(raw_to_cm(0), 0);
        assert_eq!(raw_to_cm(4), 0);
        assert_eq!(raw_to_cm(5), 1);
        assert_eq!(raw_to_cm(1234), 123);
        assert_eq!(raw_to_cm(1235), 124);
        assert_eq!(raw_to_cm(MAX_VALID_RAW), 6550);
        assert_eq!(raw_to_cm(MAX_VALID_RAW + 1), 0);
        assert_eq!(raw_to_cm(u16::MAX), 0);
    }

    #[test]
    fn test_distance_from_registers() {
        let mut bus = FakeBus::new();
        // 0x04D2 = 1234
        bus.set_register(ULTRASONIC_ADDR, REG_DISTANCE_L, 0xD2);
        bus.set_register(ULTRASONIC_ADDR, REG_DISTANCE_H, 0x04);
        assert_eq!(distance_cm(&mut bus), 123);
    }

    #[test]
    fn test_no_echo() {
        let mut bus = FakeBus::new();
        bus.set_register(ULTRASONIC_ADDR, REG_DISTANCE_L, 0xFF);
        bus.set_register(ULTRASONIC_ADDR, REG_DISTANCE_H, 0xFF);
        assert_eq!(distance_cm(&mut bus), 0);
    }

    #[test]
    fn test_bus_error() {
        let mut bus = FakeBus::new();
        bus.offline = true;
        assert_eq!(distance_cm(&mut bus), 0);
    }
}
