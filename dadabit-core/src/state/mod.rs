//! Sticky sensor readings
//!
//! The board keeps the last good value of each slow sensor and hands it out
//! on request. A fresh value only replaces the stored one when it is
//! non-zero; zero decodes are treated as sensor glitches.

pub mod readings;

pub use readings::{BoardReadings, TempHumiState};
