//! Sensor error and selector types shared by drivers and firmware

/// Errors that can occur while talking to a sensor
///
/// Drivers return these internally; the public best-effort readers collapse
/// them to a neutral value so the caller always gets a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed (no device, NACK, arbitration lost)
    Bus,
    /// Payload did not have the expected length
    ShortRead,
}

/// Which value to return from the temperature/humidity sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempHumiSelect {
    /// Air temperature in whole °C
    Temperature = 0x01,
    /// Relative humidity in whole %
    Humidity = 0x02,
}

/// One of the four line-follower photo sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineSensor {
    S1,
    S2,
    S3,
    S4,
}

impl LineSensor {
    /// Bit in the line-follower status byte for this sensor
    pub const fn mask(self) -> u8 {
        match self {
            LineSensor::S1 => 0x01,
            LineSensor::S2 => 0x02,
            LineSensor::S3 => 0x04,
            LineSensor::S4 => 0x08,
        }
    }
}

/// Surface colour a line-follower sensor can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineColor {
    Black,
    White,
}

impl LineColor {
    /// Decode one sensor from the status byte (bit set = black)
    pub const fn from_status(status: u8, sensor: LineSensor) -> Self {
        if status & sensor.mask() != 0 {
            LineColor::Black
        } else {
            LineColor::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_color_from_status() {
        let status = 0b0000_0101;
        assert_eq!(LineColor::from_status(status, LineSensor::S1), LineColor::Black);
        assert_eq!(LineColor::from_status(status, LineSensor::S2), LineColor::White);
        assert_eq!(LineColor::from_status(status, LineSensor::S3), LineColor::Black);
        assert_eq!(LineColor::from_status(status, LineSensor::S4), LineColor::White);
    }
}
