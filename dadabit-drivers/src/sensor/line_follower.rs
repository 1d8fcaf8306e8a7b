//! Four-channel line follower
//!
//! Register 0x01 holds one status bit per photo sensor (S1 = bit 0); a set
//! bit means the sensor sees a dark surface.

use dadabit_core::sensor::{LineColor, LineSensor};
use dadabit_hal::I2cBus;

/// Fixed I2C address
pub const LINE_FOLLOWER_ADDR: u8 = 0x78;

const REG_STATUS: u8 = 0x01;

/// Read the raw status byte
pub fn read_status<B: I2cBus>(bus: &mut B) -> Result<u8, B::Error> {
    bus.read_register(LINE_FOLLOWER_ADDR, REG_STATUS)
}

/// Whether `sensor` currently sees `color`
///
/// A failed read answers false for both colours.
pub fn line_follower<B: I2cBus>(bus: &mut B, sensor: LineSensor, color: LineColor) -> bool {
    match read_status(bus) {
        Ok(status) => LineColor::from_status(status, sensor) == color,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeBus, Txn};

    #[test]
    fn test_reads_status_register() {
        let mut bus = FakeBus::new();
        bus.set_register(LINE_FOLLOWER_ADDR, REG_STATUS, 0b1001);

        assert!(line_follower(&mut bus, LineSensor::S1, LineColor::Black));
        assert!(line_follower(&mut bus, LineSensor::S2, LineColor::White));
        assert!(line_follower(&mut bus, LineSensor::S3, LineColor::White));
        assert!(line_follower(&mut bus, LineSensor::S4, LineColor::Black));
        assert!(!line_follower(&mut bus, LineSensor::S4, LineColor::White));

        assert_eq!(
            bus.log[0],
            Txn::WriteRead(LINE_FOLLOWER_ADDR, vec![REG_STATUS], 1)
        );
    }

    #[test]
    fn test_upper_bits_ignored() {
        let mut bus = FakeBus::new();
        bus.set_register(LINE_FOLLOWER_ADDR, REG_STATUS, 0xF0);
        for sensor in [LineSensor::S1, LineSensor::S2, LineSensor::S3, LineSensor::S4] {
            assert!(line_follower(&mut bus, sensor, LineColor::White));
        }
    }

    #[test]
    fn test_bus_error_is_false() {
        let mut bus = FakeBus::new();
        bus.offline = true;
        assert!(!line_follower(&mut bus, LineSensor::S1, LineColor::Black));
        assert!(!line_follower(&mut bus, LineSensor::S1, LineColor::White));
    }
}
