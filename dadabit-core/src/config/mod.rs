//! Configuration types
//!
//! Everything here is compiled in. There is no configuration file and no
//! persisted state; the firmware declares its wiring as a `const`.

pub mod calibration;
pub mod ports;

pub use calibration::*;
pub use ports::*;
