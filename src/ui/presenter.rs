//! Display Presenter
//!
//! Draws the front panel onto a 16x2 character display:
//!
//! ```text
//!  col  0123456789012345
//! row0  M Y73%   98.7 ()
//! row1  ____|___________
//! ```
//!
//! Row 0 holds the tuning mode letter, antenna icon and signal percentage,
//! frequency and the stereo symbol. Row 1 is the dial scale with its needle.

use core::fmt::Write;

use heapless::String;

use super::glyphs;
use super::scale::{ScalePosition, SCALE_CELLS};
use super::CharacterDisplay;
use crate::types::{Frequency, ReceiverReading, SignalLevel, TuningMode};

/// Status row
const STATUS_ROW: u8 = 0;

/// Dial scale row
const SCALE_ROW: u8 = 1;

/// Mode letter column
const MODE_COL: u8 = 0;

/// Antenna icon column; the signal percentage follows it
const ANTENNA_COL: u8 = 2;

/// Width of the signal percentage field ("100%")
const SIGNAL_WIDTH: usize = 4;

/// Frequency field column
const FREQUENCY_COL: u8 = 8;

/// Stereo symbol column (two cells)
const STEREO_COL: u8 = 14;

/// Renders tuner state onto a character display
pub struct DisplayPresenter<D> {
    display: D,
    /// Needle currently drawn on the dial
    needle: Option<ScalePosition>,
}

impl<D: CharacterDisplay> DisplayPresenter<D> {
    /// Wrap a display
    #[must_use]
    pub const fn new(display: D) -> Self {
        Self {
            display,
            needle: None,
        }
    }

    /// Load the glyph set, blank the screen and draw an empty dial
    pub fn init(&mut self) -> Result<(), D::Error> {
        glyphs::load(&mut self.display)?;
        self.display.clear()?;
        self.display.set_cursor(0, SCALE_ROW)?;
        for _ in 0..SCALE_CELLS {
            self.display.write_glyph(glyphs::SCALE)?;
        }
        self.needle = None;
        Ok(())
    }

    /// Refresh the auto/manual letter
    pub fn show_mode(&mut self, mode: TuningMode) -> Result<(), D::Error> {
        self.display.set_cursor(MODE_COL, STATUS_ROW)?;
        self.display.write_text(mode.indicator())
    }

    /// Refresh every reading-dependent field
    pub fn show_reading(&mut self, reading: &ReceiverReading) -> Result<(), D::Error> {
        let frequency = reading.frequency();
        self.show_needle(ScalePosition::from_frequency(frequency))?;
        self.show_signal(reading.signal)?;
        self.show_frequency(frequency)?;
        self.show_stereo(reading.stereo)
    }

    /// Antenna icon followed by the signal percentage, right-padded
    pub fn show_signal(&mut self, signal: SignalLevel) -> Result<(), D::Error> {
        self.display.set_cursor(ANTENNA_COL, STATUS_ROW)?;
        self.display.write_glyph(glyphs::ANTENNA)?;
        self.display.write_text(&signal_text(signal))
    }

    /// Frequency with one decimal, left-padded below 100 MHz
    pub fn show_frequency(&mut self, frequency: Frequency) -> Result<(), D::Error> {
        self.display.set_cursor(FREQUENCY_COL, STATUS_ROW)?;
        self.display.write_text(&frequency_text(frequency))
    }

    /// Stereo symbol, or two blanks for mono
    pub fn show_stereo(&mut self, stereo: bool) -> Result<(), D::Error> {
        self.display.set_cursor(STEREO_COL, STATUS_ROW)?;
        if stereo {
            self.display.write_glyph(glyphs::STEREO_LEFT)?;
            self.display.write_glyph(glyphs::STEREO_RIGHT)
        } else {
            self.display.write_text("  ")
        }
    }

    /// Draw the dial needle, clearing its neighbouring cells
    ///
    /// A needle left further away than one cell (after a search jump) is
    /// blanked as well.
    pub fn show_needle(&mut self, position: ScalePosition) -> Result<(), D::Error> {
        if let Some(previous) = self.needle {
            if previous.major.abs_diff(position.major) > 1 {
                self.display.set_cursor(previous.major, SCALE_ROW)?;
                self.display.write_glyph(glyphs::SCALE)?;
            }
        }
        for (col, glyph) in position.cells() {
            self.display.set_cursor(col, SCALE_ROW)?;
            self.display.write_glyph(glyph)?;
        }
        self.needle = Some(position);
        Ok(())
    }

    /// Needle last drawn
    #[must_use]
    pub const fn needle(&self) -> Option<ScalePosition> {
        self.needle
    }

    /// Borrow the display
    #[must_use]
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// Borrow the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give the display back
    pub fn release(self) -> D {
        self.display
    }
}

/// Signal field text, e.g. `"73% "`
#[must_use]
pub fn signal_text(signal: SignalLevel) -> String<SIGNAL_WIDTH> {
    let mut s: String<SIGNAL_WIDTH> = String::new();
    write!(s, "{}%", signal.percent()).ok();
    while s.push(' ').is_ok() {}
    s
}

/// Frequency field text, e.g. `" 98.7"` or `"104.3"`
#[must_use]
pub fn frequency_text(frequency: Frequency) -> String<5> {
    let mut s: String<5> = String::new();
    write!(s, "{:>3}.{}", frequency.whole_mhz(), frequency.tenths_digit()).ok();
    s
}
