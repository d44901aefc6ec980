//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the FM panel hardware.
//! Bus parameters, display geometry and timing values are centralized here.
//! Pin wiring lives next to the peripheral setup in `main`.

use crate::types::Frequency;

/// I2C bus frequency shared by the tuner and the LCD backpack
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// TEA5767 I2C address (fixed by the chip)
pub const TEA5767_I2C_ADDR: u8 = 0x60;

/// PCF8574 LCD backpack I2C address
pub const LCD_I2C_ADDR: u8 = 0x27;

/// Character display columns
pub const LCD_COLUMNS: u8 = 16;

/// Character display rows
pub const LCD_ROWS: u8 = 2;

/// Debounce window opened by an accepted edge; edges inside it are bounce
///
/// Also bounds the encoder event rate to roughly 20 per second.
pub const DEBOUNCE_MS: u32 = 50;

/// Pause after issuing a search command before polling the tuner again
pub const SEARCH_SETTLE_MS: u32 = 100;

/// Main loop period
pub const LOOP_PERIOD_MS: u64 = 20;

/// Heartbeat LED on time
pub const HEARTBEAT_ON_MS: u64 = 100;

/// Heartbeat LED off time
pub const HEARTBEAT_OFF_MS: u64 = 900;

/// Startup frequency in tenths of MHz
pub const DEFAULT_FREQUENCY_TENTHS: u16 = 880;

/// Startup tuning mode (false = manual)
pub const DEFAULT_AUTO_MODE: bool = false;

/// Build the default startup frequency
#[must_use]
pub const fn default_frequency() -> Frequency {
    Frequency::clamped(DEFAULT_FREQUENCY_TENTHS)
}
