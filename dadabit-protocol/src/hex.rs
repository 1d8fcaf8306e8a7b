//! Fixed-width hexadecimal field decoding

/// Why a hex field failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// Byte at this index is not `0-9`, `A-F` or `a-f`
    InvalidDigit(usize),
    /// Value does not fit in 32 bits
    Overflow,
}

/// Value of a single hex digit
const fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        _ => None,
    }
}

/// Decode big-endian hex digits
///
/// Stops at the first invalid digit without producing a partial value.
/// An empty field decodes to 0.
pub fn parse_hex(field: &[u8]) -> Result<u32, HexError> {
    let mut value: u32 = 0;
    for (i, &byte) in field.iter().enumerate() {
        let digit = digit_value(byte).ok_or(HexError::InvalidDigit(i))?;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .ok_or(HexError::Overflow)?;
    }
    Ok(value)
}

/// Sentinel form of [`parse_hex`] for callers that want a plain number
///
/// Returns `-1` on any failure, including values above `i32::MAX`.
pub fn hex_value(field: &str) -> i32 {
    match parse_hex(field.as_bytes()) {
        Ok(value) => i32::try_from(value).unwrap_or(-1),
        Err(_) => -1,
    }
}
