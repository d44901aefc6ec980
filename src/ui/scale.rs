//! Dial Scale
//!
//! Maps a frequency onto the 16-cell dial on the second display row.
//! Each cell has five needle sub-positions, giving 80 positions across
//! the band, four per megahertz.

use super::glyphs;
use crate::types::Frequency;

/// Cells on the dial row
pub const SCALE_CELLS: u8 = 16;

/// Highest linear needle position
pub const MAX_POSITION: u16 = SCALE_CELLS as u16 * glyphs::NEEDLE_POSITIONS as u16 - 1;

/// Needle positions per megahertz
const POSITIONS_PER_MHZ: u16 = 4;

/// Needle position on the dial
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScalePosition {
    /// Dial cell (0-15)
    pub major: u8,
    /// Pixel column inside the cell (0-4)
    pub minor: u8,
}

impl ScalePosition {
    /// Map a frequency onto the dial
    ///
    /// `position = clamp((f - 88.0) * 4, 0, 79)`, truncating.
    #[must_use]
    pub const fn from_frequency(frequency: Frequency) -> Self {
        let raw = frequency.offset_from_min() * POSITIONS_PER_MHZ / 10;
        let position = if raw > MAX_POSITION { MAX_POSITION } else { raw };
        Self::from_position(position)
    }

    /// Split a linear position (clamped to 0-79) into cell and sub-position
    #[must_use]
    pub const fn from_position(position: u16) -> Self {
        let position = if position > MAX_POSITION { MAX_POSITION } else { position };
        let per_cell = glyphs::NEEDLE_POSITIONS as u16;
        Self {
            major: (position / per_cell) as u8,
            minor: (position % per_cell) as u8,
        }
    }

    /// Linear position (0-79)
    #[must_use]
    pub const fn position(self) -> u16 {
        self.major as u16 * glyphs::NEEDLE_POSITIONS as u16 + self.minor as u16
    }

    /// Glyph drawn in the needle's cell
    #[must_use]
    pub const fn needle_glyph(self) -> u8 {
        glyphs::needle(self.minor)
    }

    /// Cells rewritten to draw this needle, left to right
    ///
    /// The needle cell plus its immediate neighbours reset to the blank scale
    /// glyph, so a needle left over from a one-cell move disappears. The
    /// first and last cells have no neighbour on their outer side.
    #[must_use]
    pub fn cells(self) -> heapless::Vec<(u8, u8), 3> {
        let mut cells = heapless::Vec::new();
        if self.major > 0 {
            let _ = cells.push((self.major - 1, glyphs::SCALE));
        }
        let _ = cells.push((self.major, self.needle_glyph()));
        if self.major + 1 < SCALE_CELLS {
            let _ = cells.push((self.major + 1, glyphs::SCALE));
        }
        cells
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ScalePosition {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Scale({}:{})", self.major, self.minor);
    }
}
