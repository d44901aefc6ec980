//! Character LCD Driver
//!
//! HD44780-compatible 16x2 LCD behind a PCF8574 I2C backpack, driven in
//! 4-bit mode. Each nibble goes out as two expander writes, one with the
//! enable line high and one with it low.
//!
//! Expander pin mapping (common backpack wiring):
//!
//! ```text
//! P7 P6 P5 P4  P3  P2 P1 P0
//! D7 D6 D5 D4  BL  EN RW RS
//! ```

use crate::hal::i2c::{I2cAddress, I2cDevice, I2cResult};
use crate::ui::{CharacterDisplay, GlyphBitmap, COLUMNS, ROWS};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const TWO_LINES: u8 = 0x08;
    pub const SET_CGRAM: u8 = 0x40;
    pub const SET_DDRAM: u8 = 0x80;
    /// Function set nibble that forces 8-bit mode during reset
    pub const RESET_8BIT: u8 = 0x03;
    /// Function set nibble that switches to 4-bit mode
    pub const RESET_4BIT: u8 = 0x02;
}

/// PCF8574 control lines
mod pin {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// DDRAM address of the first cell in each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// HD44780 LCD on a PCF8574 backpack
pub struct Lcd<I, D> {
    bus: I2cDevice<I>,
    delay: D,
    backlight: bool,
}

impl<I: I2c, D: DelayNs> Lcd<I, D> {
    /// Create a new LCD driver at the configured backpack address
    pub fn new(i2c: I, delay: D) -> Self {
        Self::with_address(i2c, delay, I2cAddress::LCD_BACKPACK)
    }

    /// Create a new LCD driver at a specific backpack address
    pub fn with_address(i2c: I, delay: D, addr: I2cAddress) -> Self {
        Self {
            bus: I2cDevice::new(i2c, addr),
            delay,
            backlight: true,
        }
    }

    /// Initialize the controller
    ///
    /// Runs the reset-by-instruction sequence, then selects 4-bit, two-line
    /// mode with the cursor hidden.
    pub fn init(&mut self) -> I2cResult<(), I::Error> {
        // Power-on wait
        self.delay.delay_ms(50);

        self.write_nibble(cmd::RESET_8BIT, false)?;
        self.delay.delay_us(4500);
        self.write_nibble(cmd::RESET_8BIT, false)?;
        self.delay.delay_us(4500);
        self.write_nibble(cmd::RESET_8BIT, false)?;
        self.delay.delay_us(150);
        self.write_nibble(cmd::RESET_4BIT, false)?;

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)?;

        debug!("LCD initialized at {}", self.bus.address());
        Ok(())
    }

    /// Give the bus and delay back
    pub fn release(self) -> (I, D) {
        (self.bus.release(), self.delay)
    }

    fn write_nibble(&mut self, nibble: u8, data: bool) -> I2cResult<(), I::Error> {
        let mut byte = (nibble & 0x0F) << 4;
        if data {
            byte |= pin::RS;
        }
        if self.backlight {
            byte |= pin::BACKLIGHT;
        }
        self.bus.write(&[byte | pin::EN, byte])?;
        // Execution time of most instructions
        self.delay.delay_us(50);
        Ok(())
    }

    fn send(&mut self, byte: u8, data: bool) -> I2cResult<(), I::Error> {
        self.write_nibble(byte >> 4, data)?;
        self.write_nibble(byte & 0x0F, data)
    }

    fn command(&mut self, byte: u8) -> I2cResult<(), I::Error> {
        self.send(byte, false)
    }

    fn data(&mut self, byte: u8) -> I2cResult<(), I::Error> {
        self.send(byte, true)
    }
}

impl<I: I2c, D: DelayNs> CharacterDisplay for Lcd<I, D> {
    type Error = I::Error;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        let col = col.min(COLUMNS - 1);
        let row = usize::from(row.min(ROWS - 1));
        self.command(cmd::SET_DDRAM | (ROW_OFFSETS[row] + col))
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), Self::Error> {
        self.data(glyph)
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            // Outside ASCII the ROM tables differ between parts
            self.data(if byte.is_ascii() { byte } else { b'?' })?;
        }
        Ok(())
    }

    fn define_glyph(&mut self, id: u8, bitmap: &GlyphBitmap) -> Result<(), Self::Error> {
        self.command(cmd::SET_CGRAM | ((id & 0x07) << 3))?;
        for row in bitmap {
            self.data(row & 0x1F)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }
}
