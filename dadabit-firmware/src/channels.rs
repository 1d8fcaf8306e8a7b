//! Inter-task communication channels
//!
//! The controller task is the only owner of the sticky readings; other
//! tasks hand it data through these signals.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use dadabit_protocol::StatusReport;

/// Latest status frame from the companion controller
///
/// Only the newest report matters, so a signal (which overwrites) is used
/// rather than a queue.
pub static STATUS_REPORT: Signal<CriticalSectionRawMutex, StatusReport> = Signal::new();
