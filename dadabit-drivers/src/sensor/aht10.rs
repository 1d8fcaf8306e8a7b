//! AHT10-class temperature/humidity sensor
//!
//! # Bus protocol
//!
//! Commands are 16-bit words written big-endian with a trailing zero byte
//! (`[hi, lo, 0x00]`). The sensor wants a quiet bus before each command, so
//! every write is preceded by an 80 ms guard delay.
//!
//! A measurement runs through four phases:
//!
//! ```text
//! Idle ──► AwaitingReady ──► Measuring ──► Reading ──► Idle
//!          status 0xE108     trigger 0xAC33  6-byte payload
//!          & 0x68 == 0x08    busy bit 0x80
//! ```
//!
//! Neither polling loop is fatal when it runs out: the driver proceeds and
//! reads whatever the sensor returns. Only a failed payload read aborts.
//!
//! # Payload layout
//!
//! ```text
//! byte  0        1        2        3        4        5
//!       status   HHHHHHHH HHHHHHHH HHHHTTTT TTTTTTTT TTTTTTTT
//! ```
//! Humidity and temperature are 20-bit fields sharing byte 3.

use dadabit_core::math::round_div;
use dadabit_core::sensor::{SensorError, TempHumiSelect};
use dadabit_core::state::TempHumiState;
use dadabit_hal::{DelayNs, I2cBus};

/// Fixed I2C address
pub const AHT10_ADDR: u8 = 0x38;

/// Status query command
const CMD_STATUS: u16 = 0xE108;
/// Trigger measurement command
const CMD_TRIGGER: u16 = 0xAC33;

/// Status bits checked for readiness
const STATUS_READY_MASK: u8 = 0x68;
/// Expected value of the masked bits when ready
const STATUS_READY: u8 = 0x08;
/// Measurement in progress
const STATUS_BUSY: u8 = 0x80;

/// Extra readiness queries after the first one
pub const READY_RETRIES: u8 = 10;
/// Extra busy-bit reads after the first one
pub const BUSY_POLLS: u8 = 10;

const COMMAND_GUARD_MS: u32 = 80;
const POLL_INTERVAL_MS: u32 = 20;
const TRIGGER_SETTLE_MS: u32 = 10;

/// Measurement payload length
const PAYLOAD_LEN: usize = 6;

/// 2^20, full scale of both 20-bit fields
const FULL_SCALE: i64 = 1 << 20;

/// Measurement phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    AwaitingReady,
    Measuring,
    Reading,
}

/// Result of one measurement cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Freshly decoded temperature (may be a zero glitch)
    pub temperature_c: i16,
    /// Freshly decoded humidity (may be a zero glitch)
    pub humidity_pct: i16,
    /// Readiness poll succeeded before retries ran out
    pub ready: bool,
    /// Busy bit cleared before polls ran out
    pub settled: bool,
}

/// Temperature in whole °C from the 20-bit raw field
///
/// `round(raw * 200 / 2^20 - 50)`
pub fn temperature_from_raw(raw: u32) -> i16 {
    round_div(raw as i64 * 200 - 50 * FULL_SCALE, FULL_SCALE) as i16
}

/// Relative humidity in whole % from the 20-bit raw field
///
/// `round(raw * 100 / 2^20)`
pub fn humidity_from_raw(raw: u32) -> i16 {
    round_div(raw as i64 * 100, FULL_SCALE) as i16
}

/// Split a payload into (humidity raw, temperature raw)
pub fn split_payload(payload: &[u8; PAYLOAD_LEN]) -> (u32, u32) {
    let humidity =
        ((payload[1] as u32) << 16 | (payload[2] as u32) << 8 | payload[3] as u32) >> 4;
    let temperature =
        ((payload[3] as u32) << 16 | (payload[4] as u32) << 8 | payload[5] as u32) & 0xF_FFFF;
    (humidity, temperature)
}

impl Measurement {
    /// Fold the fresh values into `state`; zero glitches are skipped
    pub fn apply(&self, state: &mut TempHumiState) {
        state.update_temperature(self.temperature_c);
        state.update_humidity(self.humidity_pct);
    }
}

/// Temperature/humidity driver
///
/// Owns the delay source; borrows the shared bus and the caller's sticky
/// readings per call.
pub struct Aht10<D> {
    delay: D,
    phase: Phase,
}

impl<D: DelayNs> Aht10<D> {
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run a full measurement and return the selected sticky value
    ///
    /// Returns 0 when the payload could not be read; `state` is left alone
    /// in that case.
    pub fn read<B: I2cBus>(
        &mut self,
        bus: &mut B,
        state: &mut TempHumiState,
        select: TempHumiSelect,
    ) -> i16 {
        match self.measure(bus) {
            Ok(measurement) => {
                measurement.apply(state);
                state.get(select)
            }
            Err(_) => 0,
        }
    }

    /// Run a full measurement cycle
    pub fn measure<B: I2cBus>(&mut self, bus: &mut B) -> Result<Measurement, SensorError> {
        self.phase = Phase::AwaitingReady;
        let ready = self.wait_ready(bus);

        self.phase = Phase::Measuring;
        let settled = self.trigger(bus);

        self.phase = Phase::Reading;
        let payload = self.read_payload(bus);
        self.phase = Phase::Idle;
        let payload = payload?;

        let (humidity_raw, temperature_raw) = split_payload(&payload);
        Ok(Measurement {
            temperature_c: temperature_from_raw(temperature_raw),
            humidity_pct: humidity_from_raw(humidity_raw),
            ready,
            settled,
        })
    }

    fn write_command<B: I2cBus>(&mut self, bus: &mut B, command: u16) -> Result<(), SensorError> {
        let [hi, lo] = command.to_be_bytes();
        self.delay.delay_ms(COMMAND_GUARD_MS);
        bus.write(AHT10_ADDR, &[hi, lo, 0x00])
            .map_err(|_| SensorError::Bus)
    }

    fn read_status<B: I2cBus>(&mut self, bus: &mut B) -> Option<u8> {
        let mut status = [0u8; 1];
        bus.read(AHT10_ADDR, &mut status).ok()?;
        Some(status[0])
    }

    fn query_ready<B: I2cBus>(&mut self, bus: &mut B) -> bool {
        if self.write_command(bus, CMD_STATUS).is_err() {
            return false;
        }
        matches!(self.read_status(bus), Some(s) if s & STATUS_READY_MASK == STATUS_READY)
    }

    fn wait_ready<B: I2cBus>(&mut self, bus: &mut B) -> bool {
        for attempt in 0..=READY_RETRIES {
            if attempt > 0 {
                self.delay.delay_ms(POLL_INTERVAL_MS);
            }
            if self.query_ready(bus) {
                return true;
            }
        }
        false
    }

    fn trigger<B: I2cBus>(&mut self, bus: &mut B) -> bool {
        // A failed trigger write surfaces as a failed payload read
        let _ = self.write_command(bus, CMD_TRIGGER);
        self.delay.delay_ms(TRIGGER_SETTLE_MS);

        let mut status = self.read_status(bus);
        for _ in 0..BUSY_POLLS {
            if matches!(status, Some(s) if s & STATUS_BUSY == 0) {
                return true;
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
            status = self.read_status(bus);
        }
        matches!(status, Some(s) if s & STATUS_BUSY == 0)
    }

    fn read_payload<B: I2cBus>(&mut self, bus: &mut B) -> Result<[u8; PAYLOAD_LEN], SensorError> {
        let mut payload = [0u8; PAYLOAD_LEN];
        bus.read(AHT10_ADDR, &mut payload)
            .map_err(|_| SensorError::ShortRead)?;
        Ok(payload)
    }
}
