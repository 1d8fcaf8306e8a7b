//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod controller;
pub mod serial_rx;

pub use controller::controller_task;
pub use serial_rx::serial_rx_task;
