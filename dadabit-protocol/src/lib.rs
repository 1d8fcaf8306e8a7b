//! Dadabit ASCII protocols
//!
//! Two independent links, both plain ASCII:
//!
//! # Companion serial stream (inbound)
//!
//! The companion controller streams `$`-terminated status frames over UART:
//! ```text
//! ┌─────┬────────┬────────┬─────────┬─────┐
//! │ 'A' │ ANALOG │ VOLUME │ BATTERY │ '$' │
//! │ 1B  │ 2 hex  │ 2 hex  │ 2 hex   │ 1B  │
//! └─────┴────────┴────────┴─────────┴─────┘
//! ```
//! Only the battery field is consumed; one battery unit is 25.78 mV.
//!
//! # Wireless module (outbound, over I2C)
//!
//! Commands are an opcode letter, `|`-separated fields and a `$`
//! terminator, e.g. `KX|1|5|3|7$`. Replies are fixed-size buffers read back
//! after a query.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod hex;
pub mod stream;
pub mod wireless;

pub use command::{decode_command, Command, StatusReport};
pub use hex::{hex_value, parse_hex, HexError};
pub use stream::{CommandFramer, FRAME_MARKER};
pub use wireless::{
    parse_connectivity, scrape_field_value, CloudFields, WirelessError, WirelessFrame,
    CLOUD_FIELDS, FIELD_REPLY_LEN, MAX_WIRELESS_FRAME, STATUS_REPLY_LEN,
};
