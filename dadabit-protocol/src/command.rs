//! Inbound command decoding
//!
//! A frame is the text before a `$` marker. The companion controller only
//! sends one recognised shape, the `A` status report. Anything else is
//! dropped without complaint.

use crate::hex::parse_hex;

/// Opcode of the status report
pub const STATUS_OPCODE: u8 = b'A';

/// Full status frame: opcode + three 2-digit hex fields
pub const STATUS_FRAME_LEN: usize = 7;

/// Short status frame still emitted by older companion firmware
///
/// It carries the analog and volume fields only; the battery field is
/// absent and decodes as an empty field, i.e. 0.
pub const STATUS_FRAME_SHORT_LEN: usize = 5;

/// Battery field unit in hundredths of a millivolt (25.78 mV)
const BATTERY_UNIT_CENTI_MV: u32 = 2578;

/// Decoded inbound command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Status(StatusReport),
}

/// Periodic status report from the companion controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// P14 analog sample, `None` if the field was not valid hex
    pub analog: Option<u8>,
    /// Volume setting, `None` if the field was not valid hex
    pub volume: Option<u8>,
    /// Battery sample in 25.78 mV units
    pub battery_raw: u8,
}

impl StatusReport {
    /// Battery voltage in millivolts, rounded to nearest
    pub const fn battery_mv(&self) -> u16 {
        ((self.battery_raw as u32 * BATTERY_UNIT_CENTI_MV + 50) / 100) as u16
    }
}

/// Decode a 2-digit field at `offset`, reading past the end as empty
fn field(frame: &[u8], offset: usize) -> Option<u8> {
    let start = offset.min(frame.len());
    let end = (offset + 2).min(frame.len());
    parse_hex(&frame[start..end])
        .ok()
        .and_then(|v| u8::try_from(v).ok())
}

/// Decode one frame (marker already stripped)
///
/// The analog and volume fields are decoded for protocol compatibility but
/// do not gate acceptance. A battery field that is not valid hex drops the
/// whole frame.
pub fn decode_command(frame: &[u8]) -> Option<Command> {
    if frame.first() != Some(&STATUS_OPCODE) {
        return None;
    }
    if frame.len() != STATUS_FRAME_LEN && frame.len() != STATUS_FRAME_SHORT_LEN {
        return None;
    }

    let analog = field(frame, 1);
    let volume = field(frame, 3);
    let battery_raw = field(frame, 5)?;

    Some(Command::Status(StatusReport {
        analog,
        volume,
        battery_raw,
    }))
}
