//! Owned reading state
//!
//! Everything here has exactly one owner (the controller task on the real
//! board). Nothing is global.

use dadabit_protocol::StatusReport;

use crate::sensor::TempHumiSelect;

/// Last good temperature/humidity pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempHumiState {
    temperature_c: i16,
    humidity_pct: i16,
}

impl TempHumiState {
    pub const fn new() -> Self {
        Self {
            temperature_c: 0,
            humidity_pct: 0,
        }
    }

    /// Store a fresh temperature unless it is zero
    ///
    /// Returns true when the stored value changed.
    pub fn update_temperature(&mut self, celsius: i16) -> bool {
        if celsius == 0 {
            return false;
        }
        self.temperature_c = celsius;
        true
    }

    /// Store a fresh humidity unless it is zero
    pub fn update_humidity(&mut self, percent: i16) -> bool {
        if percent == 0 {
            return false;
        }
        self.humidity_pct = percent;
        true
    }

    pub const fn temperature(&self) -> i16 {
        self.temperature_c
    }

    pub const fn humidity(&self) -> i16 {
        self.humidity_pct
    }

    pub const fn get(&self, select: TempHumiSelect) -> i16 {
        match select {
            TempHumiSelect::Temperature => self.temperature_c,
            TempHumiSelect::Humidity => self.humidity_pct,
        }
    }
}

/// All sticky values the controller owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardReadings {
    pub temp_humi: TempHumiState,
    battery_mv: u16,
}

impl BoardReadings {
    pub const fn new() -> Self {
        Self {
            temp_humi: TempHumiState::new(),
            battery_mv: 0,
        }
    }

    /// Take the battery sample from a decoded status frame
    pub fn apply_status(&mut self, report: &StatusReport) {
        self.battery_mv = report.battery_mv();
    }

    /// Battery voltage in millivolts, 0 until the first status frame
    pub const fn battery_mv(&self) -> u16 {
        self.battery_mv
    }
}
