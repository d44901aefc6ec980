//! Custom glyph set
//!
//! The LCD has eight user-defined glyph slots. Slots 0-4 hold the dial
//! needle at each of the five pixel columns of a cell, slot 5 the empty
//! scale cell, slots 6 and 7 the two halves of the stereo symbol.

use super::{CharacterDisplay, GlyphBitmap};

/// First needle slot; needle for sub-position `n` lives in slot `n`
pub const NEEDLE_BASE: u8 = 0;

/// Number of needle sub-positions per cell
pub const NEEDLE_POSITIONS: u8 = 5;

/// Empty dial scale cell
pub const SCALE: u8 = 5;

/// Left half of the stereo symbol
pub const STEREO_LEFT: u8 = 6;

/// Right half of the stereo symbol
pub const STEREO_RIGHT: u8 = 7;

/// ROM character used as the antenna icon
pub const ANTENNA: u8 = b'Y';

const SCALE_BITMAP: GlyphBitmap = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x1F];

const STEREO_LEFT_BITMAP: GlyphBitmap = [0x00, 0x07, 0x08, 0x12, 0x12, 0x08, 0x07, 0x00];

const STEREO_RIGHT_BITMAP: GlyphBitmap = [0x00, 0x1C, 0x02, 0x09, 0x09, 0x02, 0x1C, 0x00];

/// Slot holding the needle at sub-position `minor` (0-4)
#[must_use]
pub const fn needle(minor: u8) -> u8 {
    NEEDLE_BASE + if minor < NEEDLE_POSITIONS { minor } else { NEEDLE_POSITIONS - 1 }
}

/// Needle bitmap: a full-height line in pixel column `minor` over the scale
#[must_use]
pub const fn needle_bitmap(minor: u8) -> GlyphBitmap {
    let line = 0x10 >> (needle(minor) - NEEDLE_BASE);
    let mut bitmap = SCALE_BITMAP;
    let mut row = 0;
    while row < bitmap.len() {
        bitmap[row] |= line;
        row += 1;
    }
    bitmap
}

/// Bitmap for a user-defined slot, None for ROM characters
#[must_use]
pub const fn bitmap(id: u8) -> Option<GlyphBitmap> {
    match id {
        0..=4 => Some(needle_bitmap(id)),
        SCALE => Some(SCALE_BITMAP),
        STEREO_LEFT => Some(STEREO_LEFT_BITMAP),
        STEREO_RIGHT => Some(STEREO_RIGHT_BITMAP),
        _ => None,
    }
}

/// Load all eight user-defined glyphs
pub fn load<D: CharacterDisplay>(display: &mut D) -> Result<(), D::Error> {
    for id in 0..8 {
        if let Some(bitmap) = bitmap(id) {
            display.define_glyph(id, &bitmap)?;
        }
    }
    Ok(())
}
