//! Analog input abstraction

/// Single ADC channel
pub trait AdcReader {
    /// Error type for conversions
    type Error;

    /// Read one raw conversion
    ///
    /// Resolution is chip dependent; callers scale it themselves.
    fn read(&mut self) -> Result<u16, Self::Error>;
}
