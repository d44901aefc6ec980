//! I2C Bus Abstractions
//!
//! Thin address-aware wrapper over a blocking `embedded-hal` I2C bus, shared
//! by the TEA5767 tuner and the LCD backpack drivers. Both sit on I2C1 through
//! `embedded_hal_bus::i2c::RefCellDevice`.

use embedded_hal::i2c::I2c;

/// I2C operation result
pub type I2cResult<T, E> = Result<T, E>;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// TEA5767 FM tuner address
    pub const TEA5767: Self = Self(crate::config::TEA5767_I2C_ADDR);

    /// PCF8574 LCD backpack address
    pub const LCD_BACKPACK: Self = Self(crate::config::LCD_I2C_ADDR);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// I2C bus bound to one device address
pub struct I2cDevice<I> {
    i2c: I,
    addr: I2cAddress,
}

impl<I: I2c> I2cDevice<I> {
    /// Bind a bus to a device address
    #[must_use]
    pub const fn new(i2c: I, addr: I2cAddress) -> Self {
        Self { i2c, addr }
    }

    /// Get the device's address
    #[must_use]
    pub const fn address(&self) -> I2cAddress {
        self.addr
    }

    /// Write bytes to the device
    pub fn write(&mut self, data: &[u8]) -> I2cResult<(), I::Error> {
        self.i2c.write(self.addr.addr(), data)
    }

    /// Read bytes from the device
    pub fn read(&mut self, buffer: &mut [u8]) -> I2cResult<(), I::Error> {
        self.i2c.read(self.addr.addr(), buffer)
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use embedded_hal::i2c::{ErrorType, Operation};
    use embedded_hal_bus::i2c::RefCellDevice;
    use std::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl ErrorType for Recorder {
        type Error = core::convert::Infallible;
    }

    impl I2c for Recorder {
        fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buffer) => buffer.fill(0xA5),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn address_is_seven_bit() {
        assert_eq!(I2cAddress::new(0xE0).addr(), 0x60);
        assert_eq!(I2cAddress::TEA5767.addr(), 0x60);
        assert_eq!(I2cAddress::LCD_BACKPACK.addr(), 0x27);
    }

    #[test]
    fn device_targets_its_address() {
        let mut dev = I2cDevice::new(Recorder::default(), I2cAddress::new(0x42));
        dev.write(&[1, 2]).unwrap();
        let mut buf = [0u8; 2];
        dev.read(&mut buf).unwrap();
        assert_eq!(buf, [0xA5, 0xA5]);
        assert_eq!(dev.release().writes, [(0x42, std::vec![1, 2])]);
    }

    #[test]
    fn shared_bus_interleaves_devices() {
        let bus = RefCell::new(Recorder::default());
        let mut tuner = I2cDevice::new(RefCellDevice::new(&bus), I2cAddress::TEA5767);
        let mut lcd = I2cDevice::new(RefCellDevice::new(&bus), I2cAddress::LCD_BACKPACK);

        tuner.write(&[0xAA]).unwrap();
        lcd.write(&[0x08]).unwrap();
        tuner.write(&[0xBB]).unwrap();

        let addresses: Vec<u8> = bus.borrow().writes.iter().map(|(a, _)| *a).collect();
        assert_eq!(addresses, [0x60, 0x27, 0x60]);
    }
}
