//! Chip adapters for the board's peripherals

use dadabit_hal::{AdcReader, HalI2c};
use embassy_rp::adc::{self, Adc, Blocking as AdcBlocking, Channel};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;

/// Shared sensor bus
pub type BoardI2c = HalI2c<I2c<'static, I2C0, Blocking>>;

/// Rain-water sensor channel
///
/// The RP2040 converter is 12-bit; readings are reduced to the 10-bit
/// range the rain scaling expects.
pub struct RainAdc {
    adc: Adc<'static, AdcBlocking>,
    channel: Channel<'static>,
}

impl RainAdc {
    pub fn new(adc: Adc<'static, AdcBlocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RainAdc {
    type Error = adc::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.channel).map(|raw| raw >> 2)
    }
}
