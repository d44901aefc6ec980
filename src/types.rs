//! Shared types used across the FM panel firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

/// Tuned frequency in tenths of a megahertz
///
/// Always inside the FM broadcast band covered by the dial,
/// 88.0 MHz to 108.0 MHz inclusive.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u16);

impl Frequency {
    /// Lower band edge (88.0 MHz)
    pub const MIN_TENTHS: u16 = 880;

    /// Upper band edge (108.0 MHz)
    pub const MAX_TENTHS: u16 = 1080;

    /// Lowest tunable frequency
    pub const MIN: Self = Self(Self::MIN_TENTHS);

    /// Highest tunable frequency
    pub const MAX: Self = Self(Self::MAX_TENTHS);

    /// Hertz per tenth of a megahertz
    const HZ_PER_TENTH: u32 = 100_000;

    /// Create a frequency from tenths of MHz, returns None if out of band
    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Option<Self> {
        if tenths >= Self::MIN_TENTHS && tenths <= Self::MAX_TENTHS {
            Some(Self(tenths))
        } else {
            None
        }
    }

    /// Create a frequency from tenths of MHz, clamped into the band
    #[must_use]
    pub const fn clamped(tenths: u16) -> Self {
        if tenths < Self::MIN_TENTHS {
            Self::MIN
        } else if tenths > Self::MAX_TENTHS {
            Self::MAX
        } else {
            Self(tenths)
        }
    }

    /// Convert a tuner-reported frequency in Hz
    ///
    /// Rounds to the nearest 0.1 MHz (halves round up) and clamps into the band.
    #[must_use]
    pub const fn from_hz(hz: u32) -> Self {
        let tenths = hz.saturating_add(Self::HZ_PER_TENTH / 2) / Self::HZ_PER_TENTH;
        if tenths > u16::MAX as u32 {
            Self::MAX
        } else {
            Self::clamped(tenths as u16)
        }
    }

    /// Get the frequency in tenths of MHz
    #[must_use]
    pub const fn as_tenths(self) -> u16 {
        self.0
    }

    /// Get the frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> u32 {
        self.0 as u32 * Self::HZ_PER_TENTH
    }

    /// Whole megahertz part (e.g. 98 for 98.7 MHz)
    #[must_use]
    pub const fn whole_mhz(self) -> u16 {
        self.0 / 10
    }

    /// Decimal digit after the point (e.g. 7 for 98.7 MHz)
    #[must_use]
    pub const fn tenths_digit(self) -> u16 {
        self.0 % 10
    }

    /// Get the frequency in MHz as floating point
    #[must_use]
    pub fn as_mhz_f32(self) -> f32 {
        f32::from(self.0) / 10.0
    }

    /// Tenths of MHz above the lower band edge
    #[must_use]
    pub const fn offset_from_min(self) -> u16 {
        self.0 - Self::MIN_TENTHS
    }

    /// One 0.1 MHz step in `direction`, or None when already at that band edge
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up if self.0 < Self::MAX_TENTHS => Some(Self(self.0 + 1)),
            Direction::Down if self.0 > Self::MIN_TENTHS => Some(Self(self.0 - 1)),
            _ => None,
        }
    }

    /// The band edge reached when moving in `direction`
    #[must_use]
    pub const fn band_edge(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::MAX,
            Direction::Down => Self::MIN,
        }
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({}.{} MHz)", self.whole_mhz(), self.tenths_digit())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole_mhz(), self.tenths_digit())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Frequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}.{} MHz", self.whole_mhz(), self.tenths_digit());
    }
}

/// Tuning or search direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards 108.0 MHz (encoder clockwise)
    Up,
    /// Towards 88.0 MHz (encoder counter-clockwise)
    Down,
}

impl Direction {
    /// The opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Direction {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Up => defmt::write!(f, "UP"),
            Self::Down => defmt::write!(f, "DOWN"),
        }
    }
}

/// Tuner-reported receive strength on a 0..=15 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SignalLevel(u8);

impl SignalLevel {
    /// Strongest reportable level
    pub const MAX: Self = Self(15);

    /// Create from a raw 4-bit level, saturating at 15
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        if raw > Self::MAX.0 {
            Self::MAX
        } else {
            Self(raw)
        }
    }

    /// Raw level (0-15)
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// Level as a truncated percentage, `floor(level * 100 / 15)`
    #[must_use]
    pub const fn percent(self) -> u8 {
        // 15 * 100 fits in u16
        ((self.0 as u16 * 100) / Self::MAX.0 as u16) as u8
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SignalLevel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}%", self.percent());
    }
}

/// Auto (search) or manual (step) tuning
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TuningMode {
    /// Encoder steps the frequency by 0.1 MHz
    #[default]
    Manual,
    /// Encoder starts a station search
    Auto,
}

impl TuningMode {
    /// Mode for the given auto flag
    #[must_use]
    pub const fn from_auto(auto: bool) -> Self {
        if auto {
            Self::Auto
        } else {
            Self::Manual
        }
    }

    /// Single-letter indicator shown on the display
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Auto => "A",
            Self::Manual => "M",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TuningMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Auto => defmt::write!(f, "AUTO"),
            Self::Manual => defmt::write!(f, "MANUAL"),
        }
    }
}

/// Per-iteration snapshot pulled from the tuner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceiverReading {
    /// Tuned frequency as reported by the tuner
    pub frequency_hz: u32,
    /// Stereo pilot detected
    pub stereo: bool,
    /// Receive strength
    pub signal: SignalLevel,
}

impl ReceiverReading {
    /// Reported frequency rounded onto the dial
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        Frequency::from_hz(self.frequency_hz)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ReceiverReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Reading({}, stereo={}, signal={})",
            self.frequency(),
            self.stereo,
            self.signal
        );
    }
}
