//! Wireless module command frames
//!
//! The module speaks a line-free ASCII protocol over I2C. Every command is
//! a single opcode letter followed by `|`-separated fields and a `$`
//! terminator:
//!
//! ```text
//! L  set access-point mode   L0$
//! A  push sensor readings    A23|41|NO$
//! I  router credentials      Iiot|||12345678$$$
//! J  connectivity query      J0$
//! K  cloud upload            KX|1|5|3|7$
//! M  cloud field query       M12345|READKEY|6$
//! ```
//!
//! Router credentials use triple separators and a triple terminator so
//! SSIDs and passwords may contain single `|`/`$` characters.
//!
//! Replies are fixed-size buffers the caller reads back after a query.

use core::fmt::Write;

use heapless::String;

/// Longest command the module accepts in one I2C write
pub const MAX_WIRELESS_FRAME: usize = 128;

/// Size of the `J` reply and of a raw data read
pub const STATUS_REPLY_LEN: usize = 3;

/// Size of the `M` reply buffer
pub const FIELD_REPLY_LEN: usize = 80;

/// Echoed opcode in a connectivity reply
pub const CONNECTIVITY_OPCODE: u8 = b'J';

/// Number of cloud channel fields
pub const CLOUD_FIELDS: usize = 8;

/// Placeholder sent for a sensor that is not fitted
const NOT_FITTED: &str = "NO";

/// Errors building a wireless frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WirelessError {
    /// Frame would exceed [`MAX_WIRELESS_FRAME`]
    FrameTooLong,
}

impl From<core::fmt::Error> for WirelessError {
    fn from(_: core::fmt::Error) -> Self {
        WirelessError::FrameTooLong
    }
}

/// Values for a cloud upload, indexed by field number - 1
pub type CloudFields = [Option<f64>; CLOUD_FIELDS];

/// One outbound command, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessFrame {
    text: String<MAX_WIRELESS_FRAME>,
}

impl WirelessFrame {
    fn start(opcode: char) -> Result<Self, WirelessError> {
        let mut text = String::new();
        text.push(opcode)
            .map_err(|_| WirelessError::FrameTooLong)?;
        Ok(Self { text })
    }

    fn push_str(&mut self, s: &str) -> Result<(), WirelessError> {
        self.text
            .push_str(s)
            .map_err(|_| WirelessError::FrameTooLong)
    }

    /// Frame text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Wire bytes, one per character
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// `L0$` - switch the module to access-point mode
    pub fn access_point_mode() -> Self {
        Self::fixed("L0$")
    }

    /// `J0$` - ask whether the module is connected to a router
    pub fn connectivity_query() -> Self {
        Self::fixed("J0$")
    }

    fn fixed(text: &'static str) -> Self {
        let mut frame = Self {
            text: String::new(),
        };
        // Fixed commands are three bytes, far below capacity
        let _ = frame.text.push_str(text);
        frame
    }

    /// `A<temp>|<humi>|<rain>$` - push the board's sensor readings
    ///
    /// Sensors that are not fitted are sent as `NO`.
    pub fn sensor_push(
        temperature_c: Option<i16>,
        humidity_pct: Option<i16>,
        rainwater: Option<u8>,
    ) -> Result<Self, WirelessError> {
        let mut frame = Self::start('A')?;
        frame.push_reading(temperature_c)?;
        frame.push_str("|")?;
        frame.push_reading(humidity_pct)?;
        frame.push_str("|")?;
        frame.push_reading(rainwater)?;
        frame.push_str("$")?;
        Ok(frame)
    }

    fn push_reading<T: core::fmt::Display>(&mut self, value: Option<T>) -> Result<(), WirelessError> {
        match value {
            Some(v) => write!(self.text, "{}", v)?,
            None => self.push_str(NOT_FITTED)?,
        }
        Ok(())
    }

    /// `I<ssid>|||<password>$$$` - join a router (station mode only)
    pub fn router_credentials(ssid: &str, password: &str) -> Result<Self, WirelessError> {
        let mut frame = Self::start('I')?;
        frame.push_str(ssid)?;
        frame.push_str("|||")?;
        frame.push_str(password)?;
        frame.push_str("$$$")?;
        Ok(frame)
    }

    /// `K<key>|n|<value>...$` - upload fields to the cloud channel
    ///
    /// Only present fields are sent, in field order. Returns `Ok(None)` when
    /// there is nothing to send: an empty write key or no fields at all.
    pub fn cloud_upload(write_key: &str, fields: &CloudFields) -> Result<Option<Self>, WirelessError> {
        if write_key.is_empty() || fields.iter().all(Option::is_none) {
            return Ok(None);
        }

        let mut frame = Self::start('K')?;
        frame.push_str(write_key)?;
        for (index, value) in fields.iter().enumerate() {
            if let Some(value) = value {
                write!(frame.text, "|{}|{}", index + 1, value)?;
            }
        }
        frame.push_str("$")?;
        Ok(Some(frame))
    }

    /// `M<channel>|<read key>|<field>$` - fetch one field of a cloud channel
    pub fn cloud_field_query(
        channel_id: &str,
        read_key: &str,
        field_id: &str,
    ) -> Result<Self, WirelessError> {
        let mut frame = Self::start('M')?;
        frame.push_str(channel_id)?;
        frame.push_str("|")?;
        frame.push_str(read_key)?;
        frame.push_str("|")?;
        frame.push_str(field_id)?;
        frame.push_str("$")?;
        Ok(frame)
    }
}

/// Interpret a `J` reply: connected iff it echoes `J` followed by 1
pub fn parse_connectivity(reply: &[u8]) -> bool {
    matches!(reply, [CONNECTIVITY_OPCODE, 1, ..])
}

/// First index at or after `from` where `needle` starts
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

/// First index of `field<field_id>`
fn find_field(reply: &[u8], field_id: &[u8]) -> Option<usize> {
    const KEY: &[u8] = b"field";
    (0..reply.len()).find(|&i| {
        reply[i..].starts_with(KEY) && reply[i + KEY.len()..].starts_with(field_id)
    })
}

/// Pull a field value out of an `M` reply
///
/// The module's reply is loosely JSON-like, e.g.
/// `{"created_at":"...","entry_id":7,"field6":"42"}`. The value is taken
/// as the three characters starting two places after the first `:` that
/// follows `field<id>`, which skips the opening quote.
///
/// Search positions behave like JavaScript's `indexOf`/`substr`, which the
/// module firmware was developed against: a missing `field<id>` searches
/// for `:` from the start, and a missing `:` starts the value at index 1.
/// Only ASCII bytes are returned.
pub fn scrape_field_value(reply: &[u8], field_id: &str) -> String<3> {
    let from = find_field(reply, field_id.as_bytes()).unwrap_or(0);
    let colon = find(reply, b":", from).map_or(-1, |i| i as isize);

    let start = ((colon + 2).max(0) as usize).min(reply.len());
    let end = (start + 3).min(reply.len());

    let mut value = String::new();
    for &byte in &reply[start..end] {
        if byte.is_ascii() {
            let _ = value.push(byte as char);
        }
    }
    value
}
