//! I2C bus abstractions
//!
//! Provides the I2C master trait used by every peripheral driver on the
//! board. All peripherals share one bus, so drivers borrow it per call
//! instead of owning it.

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// The buffer is only valid when `Ok` is returned; a transfer that
    /// fails part-way must report an error.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Write a single-byte register address and read one byte back
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.write_read(address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    /// Write a `[register, value]` pair
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[register, value])
    }
}

/// Adapter from any `embedded-hal` 1.0 blocking I2C master
///
/// Chip HALs (embassy-rp, rp2040-hal, ...) implement
/// [`embedded_hal::i2c::I2c`]; wrapping them here gives the drivers an
/// [`I2cBus`] without each chip needing its own impl.
pub struct HalI2c<T>(pub T);

impl<T> HalI2c<T> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(inner: T) -> Self {
        Self(inner)
    }
}

impl<T: embedded_hal::i2c::I2c> I2cBus for HalI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, Operation};

    /// Minimal embedded-hal master that records the last address touched
    struct EchoI2c {
        last_address: u8,
        written: [u8; 4],
        written_len: usize,
    }

    impl ErrorType for EchoI2c {
        type Error = core::convert::Infallible;
    }

    impl embedded_hal::i2c::I2c for EchoI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.last_address = address;
            for op in operations {
                match op {
                    Operation::Write(data) => {
                        self.written_len = data.len().min(4);
                        self.written[..self.written_len].copy_from_slice(&data[..self.written_len]);
                    }
                    Operation::Read(buf) => {
                        for (i, b) in buf.iter_mut().enumerate() {
                            *b = self.written[0].wrapping_add(i as u8);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_adapter_register_access() {
        let mut bus = HalI2c::new(EchoI2c {
            last_address: 0,
            written: [0; 4],
            written_len: 0,
        });

        bus.write_register(0x39, 0x81, 219).unwrap();
        assert_eq!(bus.0.last_address, 0x39);
        assert_eq!(&bus.0.written[..bus.0.written_len], &[0x81, 219]);

        let value = bus.read_register(0x39, 0x92).unwrap();
        assert_eq!(value, 0x92);
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(I2cConfig::default(), I2cConfig::STANDARD);
        assert_eq!(I2cConfig::default().frequency, 100_000);
        assert_eq!(I2cConfig::FAST.frequency, 400_000);
    }
}
