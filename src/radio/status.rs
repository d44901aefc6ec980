//! Status Register
//!
//! Shared event/mode flags written by the input handlers and consumed by the
//! tuning controller. All five flags live in one `AtomicU8`; every operation
//! is a single atomic read-modify-write, so a handler setting one flag can
//! never be lost against the controller clearing another.

use core::sync::atomic::{AtomicU8, Ordering};

/// One flag in the status register
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum StatusFlag {
    /// Encoder starts searches instead of stepping
    AutoMode = 1 << 0,
    /// Latest reading carried a stereo pilot
    StereoDetected = 1 << 1,
    /// Encoder moved clockwise
    GoUp = 1 << 2,
    /// Encoder moved counter-clockwise
    GoDown = 1 << 3,
    /// Tuner search in progress
    Searching = 1 << 4,
}

impl StatusFlag {
    /// Every flag, in bit order
    pub const ALL: [Self; 5] = [
        Self::AutoMode,
        Self::StereoDetected,
        Self::GoUp,
        Self::GoDown,
        Self::Searching,
    ];

    /// Bit mask of this flag
    #[must_use]
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for StatusFlag {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::AutoMode => defmt::write!(f, "AUTO"),
            Self::StereoDetected => defmt::write!(f, "STEREO"),
            Self::GoUp => defmt::write!(f, "GO-UP"),
            Self::GoDown => defmt::write!(f, "GO-DOWN"),
            Self::Searching => defmt::write!(f, "SEARCHING"),
        }
    }
}

/// Atomic flag set shared between handlers and the controller
pub struct StatusRegister {
    bits: AtomicU8,
}

impl StatusRegister {
    /// Create a register with every flag cleared
    #[must_use]
    pub const fn new() -> Self {
        Self::from_bits(0)
    }

    /// Create a register from raw flag bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: AtomicU8::new(bits),
        }
    }

    /// Create a register with only the auto-mode flag possibly set
    #[must_use]
    pub const fn with_auto_mode(auto: bool) -> Self {
        if auto {
            Self::from_bits(StatusFlag::AutoMode.mask())
        } else {
            Self::new()
        }
    }

    /// Set a flag
    pub fn set(&self, flag: StatusFlag) {
        self.bits.fetch_or(flag.mask(), Ordering::AcqRel);
    }

    /// Clear a flag
    pub fn clear(&self, flag: StatusFlag) {
        self.bits.fetch_and(!flag.mask(), Ordering::AcqRel);
    }

    /// Set or clear a flag
    pub fn assign(&self, flag: StatusFlag, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Check a flag without modifying it
    #[must_use]
    pub fn is_set(&self, flag: StatusFlag) -> bool {
        self.bits.load(Ordering::Acquire) & flag.mask() != 0
    }

    /// Clear a flag, returning whether it was set
    ///
    /// Read and clear happen in one atomic operation, so an event set by a
    /// handler is either returned here or left for the next call.
    pub fn take(&self, flag: StatusFlag) -> bool {
        self.bits.fetch_and(!flag.mask(), Ordering::AcqRel) & flag.mask() != 0
    }

    /// Invert a flag, returning its new state
    pub fn toggle(&self, flag: StatusFlag) -> bool {
        self.bits.fetch_xor(flag.mask(), Ordering::AcqRel) & flag.mask() == 0
    }

    /// Raw flag bits
    #[must_use]
    pub fn bits(&self) -> u8 {
        self.bits.load(Ordering::Acquire)
    }
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for StatusRegister {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let bits = self.bits();
        let mut set = f.debug_set();
        for flag in StatusFlag::ALL {
            if bits & flag.mask() != 0 {
                set.entry(&flag);
            }
        }
        set.finish()
    }
}
