//! APDS-9960 colour sensor (ambient light / RGB channels only)
//!
//! Register access is one register per transaction: the register address is
//! written, then one byte is read back. 16-bit channels are assembled as
//! `low + high * 256`.

use dadabit_core::color::{classify, Color, RawColor, RgbChannel};
use dadabit_core::config::ColorCalibration;
use dadabit_core::sensor::SensorError;
use dadabit_hal::{DelayNs, I2cBus};

/// Fixed I2C address
pub const APDS9960_ADDR: u8 = 0x39;

// Register map (subset)
const REG_ENABLE: u8 = 0x80;
const REG_ATIME: u8 = 0x81;
const REG_WTIME: u8 = 0x83;
const REG_AILTL: u8 = 0x84;
const REG_AILTH: u8 = 0x85;
const REG_AIHTL: u8 = 0x86;
const REG_AIHTH: u8 = 0x87;
const REG_PERS: u8 = 0x8C;
const REG_CONFIG1: u8 = 0x8D;
const REG_PPULSE: u8 = 0x8E;
const REG_CONTROL: u8 = 0x8F;
const REG_CONFIG2: u8 = 0x90;
const REG_ID: u8 = 0x92;
const REG_CDATAL: u8 = 0x94;
const REG_RDATAL: u8 = 0x96;
const REG_GDATAL: u8 = 0x98;
const REG_BDATAL: u8 = 0x9A;
const REG_POFFSET_UR: u8 = 0x9D;
const REG_POFFSET_DL: u8 = 0x9E;
const REG_CONFIG3: u8 = 0x9F;

// ENABLE bits
const ENABLE_PON: u8 = 1 << 0;
const ENABLE_AEN: u8 = 1 << 1;
const ENABLE_AIEN: u8 = 1 << 4;

// CONTROL fields
const CONTROL_LDRIVE_MASK: u8 = 0b1100_0000;
const CONTROL_AGAIN_MASK: u8 = 0b0000_0011;

/// LED drive 100 mA (LDRIVE = 0)
const LDRIVE_100MA: u8 = 0;
/// ALS gain 4x (AGAIN = 1)
const AGAIN_4X: u8 = 1;

/// Integration time 103 ms
const DEFAULT_ATIME: u8 = 219;
/// Wait time 27 ms
const DEFAULT_WTIME: u8 = 246;
/// 16 µs, 8 pulses
const DEFAULT_PPULSE: u8 = 0x87;
/// No 12x wait factor
const DEFAULT_CONFIG1: u8 = 0x60;
/// Force an interrupt so the thresholds can be calibrated
const DEFAULT_AILT: u16 = 0xFFFF;
const DEFAULT_AIHT: u16 = 0;
/// Two consecutive out-of-range samples per interrupt
const DEFAULT_PERS: u8 = 0x11;
/// No saturation interrupts, no LED boost
const DEFAULT_CONFIG2: u8 = 0x01;
/// All photodiodes enabled
const DEFAULT_CONFIG3: u8 = 0;

const ENABLE_SETTLE_US: u32 = 100;

/// Plain register writes performed during init, in order
const INIT_TABLE: &[(u8, u8)] = &[
    (REG_ATIME, DEFAULT_ATIME),
    (REG_WTIME, DEFAULT_WTIME),
    (REG_PPULSE, DEFAULT_PPULSE),
    (REG_POFFSET_UR, 0),
    (REG_POFFSET_DL, 0),
    (REG_CONFIG1, DEFAULT_CONFIG1),
];

/// Colour sensor driver
pub struct Apds9960<D> {
    delay: D,
    calibration: ColorCalibration,
}

impl<D: DelayNs> Apds9960<D> {
    pub fn new(delay: D, calibration: ColorCalibration) -> Self {
        Self { delay, calibration }
    }

    pub fn calibration(&self) -> &ColorCalibration {
        &self.calibration
    }

    /// Write the power-on register table, then enable ambient light sensing
    ///
    /// Returns the device ID register for logging.
    pub fn init<B: I2cBus>(&mut self, bus: &mut B) -> Result<u8, B::Error> {
        let id = bus.read_register(APDS9960_ADDR, REG_ID)?;

        // Everything off while configuring
        bus.write_register(APDS9960_ADDR, REG_ENABLE, 0x00)?;

        for &(register, value) in INIT_TABLE {
            bus.write_register(APDS9960_ADDR, register, value)?;
        }

        self.modify(bus, REG_CONTROL, CONTROL_LDRIVE_MASK, LDRIVE_100MA << 6)?;
        self.modify(bus, REG_CONTROL, CONTROL_AGAIN_MASK, AGAIN_4X)?;

        let [ailt_lo, ailt_hi] = DEFAULT_AILT.to_le_bytes();
        bus.write_register(APDS9960_ADDR, REG_AILTL, ailt_lo)?;
        bus.write_register(APDS9960_ADDR, REG_AILTH, ailt_hi)?;
        let [aiht_lo, aiht_hi] = DEFAULT_AIHT.to_le_bytes();
        bus.write_register(APDS9960_ADDR, REG_AIHTL, aiht_lo)?;
        bus.write_register(APDS9960_ADDR, REG_AIHTH, aiht_hi)?;

        bus.write_register(APDS9960_ADDR, REG_PERS, DEFAULT_PERS)?;
        bus.write_register(APDS9960_ADDR, REG_CONFIG2, DEFAULT_CONFIG2)?;
        bus.write_register(APDS9960_ADDR, REG_CONFIG3, DEFAULT_CONFIG3)?;

        self.enable_light_sensor(bus)?;
        Ok(id)
    }

    /// Gain 4x, interrupt enable, power on, ALS enable
    pub fn enable_light_sensor<B: I2cBus>(&mut self, bus: &mut B) -> Result<(), B::Error> {
        self.modify(bus, REG_CONTROL, CONTROL_AGAIN_MASK, AGAIN_4X)?;
        self.modify(bus, REG_ENABLE, ENABLE_AIEN, ENABLE_AIEN)?;
        self.modify(bus, REG_ENABLE, ENABLE_PON, ENABLE_PON)?;
        self.modify(bus, REG_ENABLE, ENABLE_AEN, ENABLE_AEN)?;
        self.delay.delay_us(ENABLE_SETTLE_US);
        Ok(())
    }

    /// Read-modify-write of the bits selected by `mask`
    fn modify<B: I2cBus>(
        &mut self,
        bus: &mut B,
        register: u8,
        mask: u8,
        value: u8,
    ) -> Result<(), B::Error> {
        let current = bus.read_register(APDS9960_ADDR, register)?;
        bus.write_register(APDS9960_ADDR, register, (current & !mask) | (value & mask))
    }

    fn read_channel<B: I2cBus>(&mut self, bus: &mut B, low: u8) -> Result<u16, SensorError> {
        let lo = bus
            .read_register(APDS9960_ADDR, low)
            .map_err(|_| SensorError::Bus)?;
        let hi = bus
            .read_register(APDS9960_ADDR, low + 1)
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Read clear, red, green and blue counts
    pub fn read_raw<B: I2cBus>(&mut self, bus: &mut B) -> Result<RawColor, SensorError> {
        Ok(RawColor {
            clear: self.read_channel(bus, REG_CDATAL)?,
            red: self.read_channel(bus, REG_RDATAL)?,
            green: self.read_channel(bus, REG_GDATAL)?,
            blue: self.read_channel(bus, REG_BDATAL)?,
        })
    }

    /// Classify the current reading
    pub fn read_color<B: I2cBus>(&mut self, bus: &mut B) -> Result<Color, SensorError> {
        let raw = self.read_raw(bus)?;
        Ok(classify(raw, &self.calibration))
    }

    /// Whether the sensor currently sees `expected`
    ///
    /// A failed read never matches.
    pub fn check_current_color<B: I2cBus>(&mut self, bus: &mut B, expected: Color) -> bool {
        matches!(self.read_color(bus), Ok(color) if color == expected)
    }

    /// One white-balanced channel in 0–255, or 0 on a failed read
    pub fn get_color<B: I2cBus>(&mut self, bus: &mut B, channel: RgbChannel) -> u8 {
        match self.read_raw(bus) {
            Ok(raw) => raw
                .balanced(&self.calibration.white_balance)
                .channel(channel),
            Err(_) => 0,
        }
    }
}
