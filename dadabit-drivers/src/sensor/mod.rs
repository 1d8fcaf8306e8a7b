//! Sensor drivers

pub mod aht10;
pub mod apds9960;
pub mod line_follower;
pub mod rain;
pub mod ultrasonic;

pub use aht10::{Aht10, Measurement, Phase, AHT10_ADDR};
pub use apds9960::{Apds9960, APDS9960_ADDR};
pub use line_follower::{line_follower, LINE_FOLLOWER_ADDR};
pub use rain::rain_level;
pub use ultrasonic::{distance_cm, ULTRASONIC_ADDR};
