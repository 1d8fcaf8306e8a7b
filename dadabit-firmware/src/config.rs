//! Board wiring and timing
//!
//! Edit and rebuild to match the modules plugged into the board.

use dadabit_core::config::{I2cPort, IoPort, PortConfig};

/// Modules fitted on this board
pub const BOARD_PORTS: PortConfig = PortConfig {
    temp_humi: Some(I2cPort::Port4),
    wifi: Some(I2cPort::Port5),
    color: Some(I2cPort::Port6),
    line_follower: None,
    ultrasonic: None,
    rainwater: Some(IoPort::Port1),
};

/// Sensor sampling period
pub const SAMPLE_INTERVAL_MS: u64 = 1000;

/// Push readings to the wireless module every N samples
pub const WIFI_PUSH_EVERY: u32 = 5;
