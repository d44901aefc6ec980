//! TEA5767 FM Tuner Driver
//!
//! Single-chip FM receiver controlled with 5-byte I2C frames; there are no
//! registers, every write sends the whole control frame and every read
//! returns the whole status frame.
//!
//! The PLL runs from the 32.768 kHz crystal with high-side injection:
//! `N = 4 * (f_rf + 225 kHz) / 32768`.

use crate::hal::i2c::{I2cAddress, I2cDevice, I2cResult};
use crate::radio::tuner::Tuner;
use crate::types::{Direction, Frequency, SignalLevel};
use embedded_hal::i2c::I2c;

/// Control frame bits
mod ctl {
    // byte 0
    pub const SEARCH_MODE: u8 = 0x40;
    // byte 2
    pub const SEARCH_UP: u8 = 0x80;
    /// Search stops above ADC level 7
    pub const STOP_LEVEL_MID: u8 = 0x40;
    pub const HIGH_SIDE_INJECTION: u8 = 0x10;
    // byte 3
    pub const XTAL_32K: u8 = 0x10;
    pub const SOFT_MUTE: u8 = 0x08;
    pub const HIGH_CUT: u8 = 0x04;
    pub const STEREO_NOISE_CANCEL: u8 = 0x02;
}

/// Status frame bits
mod sts {
    // byte 0
    pub const READY: u8 = 0x80;
    pub const BAND_LIMIT: u8 = 0x40;
    // byte 2
    pub const STEREO: u8 = 0x80;
    // byte 3
    pub const LEVEL_SHIFT: u8 = 4;
}

/// Bits 13..8 of the PLL word in byte 0
const PLL_HIGH_MASK: u8 = 0x3F;

/// Raw 5-byte status frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Status([u8; 5]);

impl Status {
    /// Wrap raw bytes read from the chip
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    /// Raw bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }

    /// PLL locked on a channel (or a search stopped)
    #[must_use]
    pub const fn ready(&self) -> bool {
        self.0[0] & sts::READY != 0
    }

    /// Search ran into a band edge
    #[must_use]
    pub const fn band_limit(&self) -> bool {
        self.0[0] & sts::BAND_LIMIT != 0
    }

    /// 14-bit PLL word
    #[must_use]
    pub const fn pll(&self) -> u16 {
        ((self.0[0] & PLL_HIGH_MASK) as u16) << 8 | self.0[1] as u16
    }

    /// Stereo pilot detected
    #[must_use]
    pub const fn stereo(&self) -> bool {
        self.0[2] & sts::STEREO != 0
    }

    /// 4-bit ADC level
    #[must_use]
    pub const fn level(&self) -> SignalLevel {
        SignalLevel::from_raw(self.0[3] >> sts::LEVEL_SHIFT)
    }

    /// Tuned frequency in Hz
    #[must_use]
    pub const fn frequency_hz(&self) -> u32 {
        pll_to_hz(self.pll())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "TEA5767(rf={}, blf={}, pll={}, st={}, lev={})",
            self.ready(),
            self.band_limit(),
            self.pll(),
            self.stereo(),
            self.level().as_raw()
        );
    }
}

/// Crystal reference frequency
pub const XTAL_HZ: u32 = 32_768;

/// Intermediate frequency offset for high-side injection
pub const IF_HZ: u32 = 225_000;

/// PLL word for an RF frequency, rounded to nearest
#[must_use]
pub const fn hz_to_pll(hz: u32) -> u16 {
    let pll = (4 * (hz + IF_HZ) + XTAL_HZ / 2) / XTAL_HZ;
    if pll > 0x3FFF {
        0x3FFF
    } else {
        pll as u16
    }
}

/// RF frequency for a PLL word
#[must_use]
pub const fn pll_to_hz(pll: u16) -> u32 {
    (pll as u32 * XTAL_HZ / 4).saturating_sub(IF_HZ)
}

/// Search start offset from the current channel
const SEARCH_STEP_HZ: u32 = 100_000;

/// `TEA5767` driver
pub struct Tea5767<I> {
    bus: I2cDevice<I>,
    /// Shadow copy of the last control frame
    frame: [u8; 5],
}

impl<I: I2c> Tea5767<I> {
    /// Create a new `TEA5767` driver at the chip's fixed address
    #[must_use]
    pub const fn new(i2c: I) -> Self {
        Self {
            bus: I2cDevice::new(i2c, I2cAddress::TEA5767),
            frame: [0; 5],
        }
    }

    /// Last control frame written
    #[must_use]
    pub const fn frame(&self) -> &[u8; 5] {
        &self.frame
    }

    /// Program the PLL, optionally in search mode
    fn program(&mut self, hz: u32, search: Option<Direction>) -> I2cResult<(), I::Error> {
        let pll = hz_to_pll(hz);

        let mut frame = [0u8; 5];
        frame[0] = (pll >> 8) as u8 & PLL_HIGH_MASK;
        frame[1] = pll as u8;
        frame[2] = ctl::HIGH_SIDE_INJECTION | ctl::STOP_LEVEL_MID;
        frame[3] = ctl::XTAL_32K | ctl::SOFT_MUTE | ctl::HIGH_CUT | ctl::STEREO_NOISE_CANCEL;
        // 50 us de-emphasis, PLL reference from the crystal
        frame[4] = 0;

        if let Some(direction) = search {
            frame[0] |= ctl::SEARCH_MODE;
            if direction == Direction::Up {
                frame[2] |= ctl::SEARCH_UP;
            }
        }

        self.bus.write(&frame)?;
        self.frame = frame;
        Ok(())
    }

    /// Read the raw status frame
    pub fn read_frame(&mut self) -> I2cResult<Status, I::Error> {
        let mut bytes = [0u8; 5];
        self.bus.read(&mut bytes)?;
        Ok(Status(bytes))
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.bus.release()
    }
}

impl<I: I2c> Tuner for Tea5767<I> {
    type Snapshot = Status;
    type Error = I::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.program(crate::config::default_frequency().as_hz(), None)
    }

    fn set_frequency(&mut self, frequency: Frequency) -> Result<(), Self::Error> {
        self.program(frequency.as_hz(), None)
    }

    fn read_status(&mut self) -> Result<Option<Status>, Self::Error> {
        let status = self.read_frame()?;
        Ok(status.ready().then_some(status))
    }

    fn frequency_hz(&self, snapshot: &Status) -> u32 {
        snapshot.frequency_hz()
    }

    fn is_stereo(&self, snapshot: &Status) -> bool {
        snapshot.stereo()
    }

    fn signal_level(&self, snapshot: &Status) -> SignalLevel {
        snapshot.level()
    }

    fn search_up(&mut self, snapshot: &Status) -> Result<(), Self::Error> {
        let start = Frequency::from_hz(snapshot.frequency_hz()).as_hz() + SEARCH_STEP_HZ;
        self.program(start, Some(Direction::Up))
    }

    fn search_down(&mut self, snapshot: &Status) -> Result<(), Self::Error> {
        let start = Frequency::from_hz(snapshot.frequency_hz()).as_hz() - SEARCH_STEP_HZ;
        self.program(start, Some(Direction::Down))
    }

    /// Done once the chip is ready away from a band edge
    ///
    /// At a band edge the search wraps to the opposite edge and continues in
    /// the same direction. On success the found channel is re-tuned with
    /// search mode off, snapped to the 100 kHz raster.
    fn is_search_complete(&mut self, snapshot: &Status, direction: Direction) -> Result<bool, Self::Error> {
        if !snapshot.ready() {
            return Ok(false);
        }

        if snapshot.band_limit() {
            let restart = Frequency::band_edge(direction.reverse());
            debug!("search hit band edge, wrapping to {}", restart);
            self.program(restart.as_hz(), Some(direction))?;
            return Ok(false);
        }

        let found = Frequency::from_hz(snapshot.frequency_hz());
        self.program(found.as_hz(), None)?;
        Ok(true)
    }
}
