//! Board port assignment
//!
//! The expansion board exposes numbered sockets. I2C peripherals answer on
//! fixed addresses whatever socket they are in, so the assignment only
//! records which optional modules are fitted. The wireless sensor push
//! reports `NO` for modules that are not.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// I2C-capable sockets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum I2cPort {
    Port4 = 0x04,
    Port5 = 0x05,
    Port6 = 0x06,
}

/// Digital/analog IO sockets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IoPort {
    Port1 = 0x01,
    Port2 = 0x02,
}

/// Which optional module sits in which socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PortConfig {
    pub temp_humi: Option<I2cPort>,
    pub wifi: Option<I2cPort>,
    pub color: Option<I2cPort>,
    pub line_follower: Option<I2cPort>,
    pub ultrasonic: Option<I2cPort>,
    pub rainwater: Option<IoPort>,
}

impl PortConfig {
    /// Nothing fitted
    pub const EMPTY: Self = Self {
        temp_humi: None,
        wifi: None,
        color: None,
        line_follower: None,
        ultrasonic: None,
        rainwater: None,
    };

    pub const fn has_temp_humi(&self) -> bool {
        self.temp_humi.is_some()
    }

    pub const fn has_wifi(&self) -> bool {
        self.wifi.is_some()
    }

    pub const fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub const fn has_line_follower(&self) -> bool {
        self.line_follower.is_some()
    }

    pub const fn has_ultrasonic(&self) -> bool {
        self.ultrasonic.is_some()
    }

    pub const fn has_rainwater(&self) -> bool {
        self.rainwater.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_nothing() {
        let ports = PortConfig::EMPTY;
        assert_eq!(ports, PortConfig::default());
        assert!(!ports.has_temp_humi());
        assert!(!ports.has_wifi());
        assert!(!ports.has_color());
        assert!(!ports.has_line_follower());
        assert!(!ports.has_ultrasonic());
        assert!(!ports.has_rainwater());
    }

    #[test]
    fn test_partial_assignment() {
        let ports = PortConfig {
            temp_humi: Some(I2cPort::Port4),
            rainwater: Some(IoPort::Port2),
            ..PortConfig::EMPTY
        };
        assert!(ports.has_temp_humi());
        assert!(ports.has_rainwater());
        assert!(!ports.has_wifi());
        assert_eq!(ports.rainwater.map(|p| p as u8), Some(0x02));
    }
}
